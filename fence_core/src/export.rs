//! # Text Export
//!
//! Flattens a takeoff into plain text lines for clipboard copy, printing
//! or a CLI. Formatting is cosmetic only; every number comes straight from
//! the [`FenceTakeoff`].
//!
//! ## Example
//!
//! ```rust
//! use fence_core::export::format_usd;
//!
//! assert_eq!(format_usd(1234.5), "$1,234.50");
//! assert_eq!(format_usd(-12.0), "-$12.00");
//! ```

use crate::calculations::cost::{CostEstimate, CostRange};
use crate::calculations::quantities::ItemGroup;
use crate::calculations::FenceTakeoff;
use crate::project::ProjectSpec;

/// Dollars with thousands separators and two decimals
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// `$1,200.00 - $2,200.00`
pub fn format_range(range: CostRange) -> String {
    format!("{} - {}", format_usd(range.low), format_usd(range.high))
}

/// Bill of quantities grouped by section, zero lines omitted.
///
/// ```text
/// Posts
///   Line posts: 20 ea
///   Post length: 10 ft (36" burial)
/// Framing
///   Rails: 57 ea
/// ```
pub fn materials_lines(takeoff: &FenceTakeoff) -> Vec<String> {
    let bom = &takeoff.bill_of_quantities;
    let mut lines = Vec::new();

    for group in ItemGroup::ALL {
        let items: Vec<_> = bom
            .items
            .iter()
            .filter(|line| line.item.group() == group && line.quantity > 0)
            .collect();
        if items.is_empty() {
            continue;
        }

        lines.push(group.display_name().to_string());
        for line in items {
            lines.push(format!("  {}: {} {}", line.item.label(), line.quantity, line.item.unit()));
        }

        if group == ItemGroup::Posts {
            let depth = &takeoff.post_depth;
            let special = if depth.special_order { ", special order" } else { "" };
            lines.push(format!(
                "  Post length: {} ft ({}\" burial{})",
                depth.standard_post_length_ft, depth.burial_depth_in, special
            ));
        }
    }

    if bom.waste_buffer {
        lines.push("Includes 10% waste buffer on cut stock".to_string());
    }
    lines
}

/// Itemized cost lines followed by the totals block
pub fn cost_lines(cost: &CostEstimate) -> Vec<String> {
    let mut lines: Vec<String> = cost
        .lines
        .iter()
        .map(|line| format!("  {}: {}", line.label, format_range(line.range)))
        .collect();

    lines.push(format!("Materials (DIY): {}", format_range(cost.total_material)));
    lines.push(format!("Labor: {}", format_range(cost.labor)));
    if !cost.overhead.is_zero() {
        lines.push(format!("Contractor overhead: {}", format_range(cost.overhead)));
    }
    lines.push(format!("Professional install: {}", format_range(cost.professional)));
    lines.push(format!("DIY savings: {}", format_range(cost.diy_savings)));
    lines.push(format!(
        "Per foot: {} DIY, {} installed",
        format_range(cost.per_foot.material),
        format_range(cost.per_foot.professional)
    ));
    lines
}

/// Whole takeoff as one block of text.
pub fn summary_text(spec: &ProjectSpec, takeoff: &FenceTakeoff) -> String {
    let topo = &takeoff.topology;
    let mut out = vec![
        format!("{}, {} ft high", spec.material.description(), spec.height_ft),
        format!(
            "{:.1} ft run, {:.1} ft fenceable, {} sections, {} posts",
            topo.length_ft, topo.fenceable_length_ft, topo.fence_sections, topo.total_posts
        ),
    ];
    if topo.gate_count() > 0 {
        out.push(format!("Gates: {} walk, {} drive", topo.walk_gates, topo.drive_gates));
    }

    out.push(String::new());
    out.push("MATERIALS".to_string());
    out.extend(materials_lines(takeoff));
    out.push(String::new());
    out.push("COST".to_string());
    out.extend(cost_lines(&takeoff.cost));
    out.join("\n")
}
