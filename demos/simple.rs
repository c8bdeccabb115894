use ziplinex::{calculate_zipline_curve, ZiplineParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 100 m line dropping 4 m with a 122 kg rider parked at midspan
    let parameters = ZiplineParameters::default();

    // Solve the sag profile, anchor reactions and rider speed
    let result = calculate_zipline_curve(&parameters)?;

    // Print the speed every 10 m along the line
    for p in result.travel_profile.iter().step_by(10) {
        println!(
            "x = {:5.1} m  y = {:6.2} m  speed = {:4.1} km/h",
            p.x,
            p.y,
            p.speed.unwrap_or(0.0)
        );
    }
    println!("cable length = {:.2} m", result.cable_length);

    Ok(())
}
