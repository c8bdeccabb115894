use ziplinex::tension::round_to_rigging_increment;
use ziplinex::{calculate_optimal_tension, design_report, CableSpec, ZiplineParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick a rope from the catalog
    let cable = CableSpec::find("Triniks ZL 10mm").ok_or("cable not in catalog")?;

    // Let the line sag 2 % of the span under a 120 kg rider
    let span = 150.0;
    let tension_kg = round_to_rigging_increment(calculate_optimal_tension(
        span,
        cable.mass_per_meter,
        0.02,
    )?);

    // Solve with a heavy rider on a cold day
    let parameters = ZiplineParameters {
        span,
        start_height: 20.0,
        end_height: 12.5,
        rope_mass_per_meter: cable.mass_per_meter,
        tension_kg,
        load_weight_kg: 130.0,
        load_position_x: span / 2.0,
        temperature_c: -10.0,
        ..ZiplineParameters::default()
    };
    let report = design_report(&parameters, Some(&cable), 1.0)?;

    // Compare the rope's breaking strength with the peak tension
    match report.summary.safety_factor {
        Some(factor) if report.summary.is_safe() => {
            println!("{tension_kg:.0} kg pre-tension, safety factor {factor:.1}");
        }
        Some(factor) => println!("{tension_kg:.0} kg pre-tension is unsafe: factor {factor:.1}"),
        None => println!("Breaking strength unknown for {}", cable.name),
    }

    Ok(())
}
