use std::fmt::Write;

use ziplinex::constants::MIN_SAFETY_FACTOR;
use ziplinex::{CableSpec, DesignReport};

/// Render a textual summary of a solved zipline.
///
/// The report lists the same headline figures a rigger checks by hand: sag,
/// cable length, rider speeds, anchor forces and the factor of safety of the rope.
#[must_use]
pub fn render_summary(report: &DesignReport, cable: Option<&CableSpec>) -> String {
    let mut output = String::new();
    let parameters = &report.parameters;
    let summary = &report.summary;

    writeln!(
        &mut output,
        "Zipline {:.1} m span, {:.1} m -> {:.1} m (drop {:.1} m), tension {:.0} kg at {:.0} °C",
        parameters.span,
        parameters.start_height,
        parameters.end_height,
        parameters.start_height - parameters.end_height,
        parameters.tension_kg,
        parameters.temperature_c
    )
    .expect("writing to string cannot fail");

    if let Some(cable) = cable {
        writeln!(
            &mut output,
            "Rope: {} ({:.2} kg/m)",
            cable.name, cable.mass_per_meter
        )
        .expect("writing to string cannot fail");
    } else {
        writeln!(
            &mut output,
            "Rope: custom ({:.2} kg/m)",
            parameters.rope_mass_per_meter
        )
        .expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Rider: {:.0} kg + {:.0} kg equipment at {:.1} m, drag area {:.2} m²",
        parameters.load_weight_kg,
        parameters.equipment_weight_kg,
        parameters.load_position_x,
        parameters.drag_area
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Max sag: {:.2} m | Cable length: {:.1} m",
        summary.max_sag, summary.cable_length
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Speed: max {:.0} km/h, finish {:.0} km/h, at rider position {:.0} km/h",
        summary.max_speed, summary.finish_speed, summary.speed_at_load
    )
    .expect("writing to string cannot fail");

    let reactions = &report.result.reactions;
    writeln!(
        &mut output,
        "Start anchor: H = {:.0} kg, V = {:+.0} kg | End anchor: H = {:.0} kg, V = {:+.0} kg",
        reactions.start.horizontal,
        reactions.start.vertical,
        reactions.end.horizontal,
        reactions.end.vertical
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Max cable tension: {:.0} kg ({:.1} kN)",
        summary.max_tension_kg,
        report.result.max_tension_newtons / 1_000.0
    )
    .expect("writing to string cannot fail");

    let lowest_clearance = report
        .clearance_line
        .iter()
        .map(|p| p.y)
        .fold(f64::INFINITY, f64::min);
    if lowest_clearance.is_finite() {
        writeln!(
            &mut output,
            "Lowest point with {:.1} m clearance: {:.2} m",
            report.clearance_margin, lowest_clearance
        )
        .expect("writing to string cannot fail");
    }

    match summary.safety_factor {
        Some(factor) if summary.is_safe() => {
            writeln!(&mut output, "Safety factor: {factor:.1}")
                .expect("writing to string cannot fail");
        }
        Some(factor) => {
            writeln!(
                &mut output,
                "Safety factor: {factor:.1} (WARNING: below {MIN_SAFETY_FACTOR:.0})"
            )
            .expect("writing to string cannot fail");
        }
        None => output.push_str("Safety factor: not available (rope strength unknown)\n"),
    }

    output
}

/// Render the cable catalog as a table.
#[must_use]
pub fn render_cables(cables: &[CableSpec]) -> String {
    let mut output = String::new();
    for cable in cables {
        let grades = cable
            .breaking_strength_by_grade
            .iter()
            .map(|(grade, strength)| format!("{grade}: {strength} kN"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            &mut output,
            "{:<18} {:.2} kg/m  {}",
            cable.name, cable.mass_per_meter, grades
        )
        .expect("writing to string cannot fail");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziplinex::{design_report, ZiplineParameters};

    #[test]
    fn formats_human_readable_report() {
        let cable = CableSpec::find("Triniks ZL 12mm");
        let report = design_report(&ZiplineParameters::default(), cable.as_ref(), 1.0)
            .expect("reference line solves");
        let text = render_summary(&report, cable.as_ref());
        assert!(text.contains("Zipline 100.0 m span"));
        assert!(text.contains("Rope: Triniks ZL 12mm (0.86 kg/m)"));
        assert!(text.contains("Max sag:"));
        assert!(text.contains("Safety factor:"));
    }

    #[test]
    fn missing_rope_strength_is_reported() {
        let report =
            design_report(&ZiplineParameters::default(), None, 1.0).expect("reference line solves");
        let text = render_summary(&report, None);
        assert!(text.contains("Rope: custom"));
        assert!(text.contains("not available"));
    }

    #[test]
    fn lists_every_catalog_cable() {
        let text = render_cables(&CableSpec::catalog());
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("1770: 92.5 kN"));
    }
}
