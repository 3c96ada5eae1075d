// ABOUTME: Fixed chat replies sent back to LINE users
// ABOUTME: The metrics summary is rendered by format_metrics_summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tdee_coach_core::models::MetricsResult;

/// Reply to the start keyword
pub const START_PROMPT: &str = "請輸入資料（格式：男, 21歲, 175, 70, 中等）";

/// Reply when no profile is on file or the message is not understood
pub const GUIDANCE_PROMPT: &str = "⚠️ 請先輸入你的基本資料（例如：男, 21歲, 175, 70, 中等）";

/// Reply when advice generation fails
pub const ADVICE_FALLBACK: &str = "⚠️ AI 回應目前無法取得，請稍後再試 🙇‍♂️";

/// Goal menu appended to every metrics summary
pub const GOAL_MENU: &str = "請問你的目標是：\n1️⃣ 增肌\n2️⃣ 減脂\n3️⃣ 維持\n請輸入數字或文字～";

/// Render a decimal the way users typed it: `25.0`, `22.86`, `55.5`
///
/// `Display` drops the fractional part of whole numbers (`25`); `Debug` keeps
/// one digit after the point and otherwise prints the shortest round-trip form.
#[must_use]
pub fn format_decimal(value: f64) -> String {
    format!("{value:?}")
}

/// Render the summary sent after a successful profile parse
#[must_use]
pub fn format_metrics_summary(metrics: &MetricsResult) -> String {
    format!(
        "✅ 你的 BMI：{}\n✅ BMR：{} 大卡\n✅ TDEE：{} 大卡\n\n{GOAL_MENU}",
        format_decimal(metrics.bmi),
        metrics.bmr,
        metrics.tdee
    )
}
