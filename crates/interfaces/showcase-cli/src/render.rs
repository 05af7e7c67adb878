//! Plain-text rendering of view models.

use std::fmt::Write as _;
use std::time::Duration;

use showcase_app_core::viewmodel::{DemoVm, MessageVm, StageVm, WorkflowCardVm};
use showcase_app_core::Schedule;
use showcase_core::analysis::AnalysisPanel;
use showcase_core::{DemoStep, Role};

fn role_tag(role: Role) -> &'static str {
    match role {
        Role::User => "you",
        Role::Assistant => "assistant",
        Role::System => "system",
    }
}

pub fn render_message(m: &MessageVm) -> String {
    let msg = &m.message;
    let mut out = match &msg.timestamp {
        Some(ts) => format!("[{} · {}]", role_tag(msg.role), ts),
        None => format!("[{}]", role_tag(msg.role)),
    };
    if msg.is_loading {
        out.push_str(" …");
    }
    out.push('\n');

    for line in msg.content.lines() {
        let _ = writeln!(out, "  {line}");
    }
    for src in &m.sources {
        let _ = writeln!(out, "  ↳ {} <{}>", src.title, src.href);
    }
    out
}

pub fn render_stages(title: &str, stages: &[StageVm]) -> String {
    let mut out = format!("{title}\n");
    for s in stages {
        let _ = writeln!(out, "  {} {}: {}", s.marker, s.name, s.message);
    }
    out
}

pub fn render_analysis(panel: &AnalysisPanel) -> String {
    let mut out = String::new();
    match panel {
        AnalysisPanel::Placeholder {
            title,
            description,
            note,
        } => {
            let _ = writeln!(out, "## {title}");
            let _ = writeln!(out, "{description}");
            let _ = writeln!(out, "{note}");
        }
        AnalysisPanel::Analysis {
            title,
            subtitle,
            framework,
            hierarchy,
            context,
            confidence,
        } => {
            let _ = writeln!(out, "## {title}: {subtitle}");
            out.push_str("Decision Framework\n");
            for row in framework {
                let _ = writeln!(out, "  {}: {}", row.label, row.value);
            }
            out.push_str("Performance Hierarchy\n");
            for tier in hierarchy {
                let _ = writeln!(out, "  {} [{}]", tier.name, tier.badge);
                for row in &tier.metrics {
                    let _ = writeln!(out, "    {}: {}", row.label, row.value);
                }
            }
            let _ = writeln!(out, "{}", context.title);
            for point in &context.points {
                let _ = writeln!(out, "  • {point}");
            }
            let _ = writeln!(out, "Confidence & Risk ({})", confidence.overall);
            for row in &confidence.rows {
                let _ = writeln!(out, "  {}: {}", row.label, row.value);
            }
            if let Some(note) = confidence.integration_note {
                let _ = writeln!(out, "  {note}");
            }
        }
    }
    out
}

/// A full snapshot of the demo screen.
pub fn render_frame(vm: &DemoVm) -> String {
    let mut out = format!(
        "== Step {}/{}: {} ==\n",
        vm.step,
        DemoStep::Improved,
        vm.step.label()
    );

    for m in &vm.messages {
        out.push_str(&render_message(m));
    }

    if !vm.suggestions.is_empty() {
        out.push_str("Try asking:\n");
        for s in &vm.suggestions {
            let _ = writeln!(out, "  - {s}");
        }
    }

    if vm.disclosure.show_data_panel {
        out.push('\n');
        out.push_str(&render_analysis(&vm.analysis));
    }

    let input = if vm.input.value.is_empty() {
        vm.input.placeholder.to_string()
    } else {
        vm.input.value.clone()
    };
    let _ = writeln!(out, "> {input}");
    out
}

pub fn render_catalog(cards: &[WorkflowCardVm]) -> String {
    let mut out = String::new();
    for c in cards {
        let mark = if c.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{mark} {:>2}. {:<28} [{}]  {}",
            c.id, c.title, c.badge, c.description
        );
    }
    out
}

fn format_offset(d: Duration) -> String {
    format!("+{}.{:03}s", d.as_secs(), d.subsec_millis())
}

pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    for m in schedule.milestones() {
        let _ = match m.step {
            Some(step) => writeln!(
                out,
                "{:>10}  {} (step {})",
                format_offset(m.at),
                m.label,
                step
            ),
            None => writeln!(out, "{:>10}  {}", format_offset(m.at), m.label),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_millisecond_precise() {
        assert_eq!(format_offset(Duration::from_millis(6_300)), "+6.300s");
        assert_eq!(format_offset(Duration::from_millis(26_400)), "+26.400s");
        assert_eq!(format_offset(Duration::ZERO), "+0.000s");
    }
}
