use aztro_lite::{BirthInfo, Location, TransitReading};
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Example usage
    // aghil mohan 18th june 1991 07:10 AM , calicut kerala india
    let birth_info = BirthInfo {
        date_time: Utc.with_ymd_and_hms(1991, 6, 18, 7, 10, 0).unwrap(),
        location: Location::new(10.522, 76.172),
    };

    let natal = match birth_info.natal_chart() {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };
    println!("Natal chart");
    println!("{natal}");

    let mut rng = StdRng::from_entropy();
    match TransitReading::calculate(&natal, Utc::now(), &birth_info.location, &mut rng) {
        Ok(reading) => {
            println!("Today");
            println!("{reading}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }
}
