//! Plain-text rendering of tick reports

use std::fmt::Write;

use lifetimer::{Countdown, DurationBreakdown, FamilyDetail, FamilyTime, TickReport};

const PROGRESS_BAR_WIDTH: usize = 30;

pub fn render_report(report: &TickReport) -> String {
    let mut out = render_countdown(&report.countdown);
    for family_time in &report.family {
        out.push('\n');
        out.push_str(&render_family(family_time));
    }
    out
}

pub fn render_countdown(countdown: &Countdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Time remaining until {}", countdown.target_date);
    let _ = writeln!(out, "  {}", format_units(&countdown.breakdown));
    if countdown.is_finished() {
        let _ = writeln!(out, "  Target age reached");
    }
    let _ = writeln!(
        out,
        "  {} {}%",
        progress_bar(countdown.progress_percent, PROGRESS_BAR_WIDTH),
        countdown.progress_rounded()
    );
    if let Some(sleeps) = countdown.sleep_remaining {
        let _ = writeln!(out, "  Nights of sleep left: {}", group_thousands(sleeps));
    }
    if let Some(meals) = countdown.meal_remaining {
        let _ = writeln!(out, "  Meals left: {}", group_thousands(meals));
    }
    out
}

pub fn render_family(family_time: &FamilyTime) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Time with {} ({})",
        family_time.name, family_time.relationship
    );
    let _ = writeln!(out, "  {}", format_units(&family_time.breakdown));
    let _ = writeln!(out, "  {}", detail_text(family_time));
    out
}

fn detail_text(family_time: &FamilyTime) -> String {
    match family_time.detail {
        FamilyDetail::UntilAdulthood { current_age } => {
            format!("until adulthood (currently {})", current_age)
        }
        FamilyDetail::AlreadyAdult => "already an adult".to_string(),
        FamilyDetail::SharedLifetime {
            user_remaining_years,
            member_remaining_years,
        } => format!(
            "shared time (you: {} years, {}: {} years)",
            user_remaining_years, family_time.name, member_remaining_years
        ),
        FamilyDetail::NoSharedTime => "no shared time remaining".to_string(),
    }
}

fn format_units(b: &DurationBreakdown) -> String {
    format!(
        "{:02} years {:02} months {:02} days {:02}:{:02}:{:02}",
        b.years, b.months, b.days, b.hours, b.minutes, b.seconds
    )
}

fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
