//! Reference table queries: `locate`, `routes` and `callsign`.

use sectorscope::reference::{PrdEntry, ReferenceTables};

use crate::error::CliError;

/// Print where `name` is and what it is.
pub fn run_locate(reference: &ReferenceTables, name: &str) -> Result<(), CliError> {
    let line = describe(reference, &name.to_uppercase())
        .ok_or_else(|| CliError::NotFound(format!("'{}'", name)))?;
    println!("{}", line);
    Ok(())
}

/// Print the preferred routes from `depart` to `arrive`.
pub fn run_routes(reference: &ReferenceTables, depart: &str, arrive: &str) -> Result<(), CliError> {
    let depart = depart.to_uppercase();
    let arrive = arrive.to_uppercase();
    let routes = reference.preferred_routes(&depart, &arrive);
    if routes.is_empty() {
        return Err(CliError::NotFound(format!(
            "Preferred route from {} to {}",
            depart, arrive
        )));
    }

    println!("Preferred routes {} -> {}", depart, arrive);
    for entry in routes {
        println!("  {}", format_route(entry));
    }
    Ok(())
}

/// Print the airline behind a three-letter code.
pub fn run_callsign(reference: &ReferenceTables, code: &str) -> Result<(), CliError> {
    let code = code.to_uppercase();
    let callsign = reference
        .callsign(&code)
        .ok_or_else(|| CliError::NotFound(format!("Callsign {}", code)))?;
    println!(
        "{}: {} ({}, {})",
        callsign.three_letter, callsign.telephony, callsign.company, callsign.country
    );
    Ok(())
}

/// One line describing the navaid, fix or airport `id`.
fn describe(reference: &ReferenceTables, id: &str) -> Option<String> {
    let location = reference.locate(id)?;
    let kind = if let Some(navaid) = reference.navaid(id) {
        format!("{} {}", navaid.navtype, navaid.name)
    } else if let Some(airport) = reference.airport(id) {
        format!("airport {}, elevation {} ft", airport.name, airport.elevation)
    } else {
        "fix".to_string()
    };
    Some(format!("{}: {} ({})", id, location, kind))
}

fn format_route(entry: &PrdEntry) -> String {
    let mut line = entry.route.clone();
    let details: Vec<&str> = [&entry.altitude, &entry.aircraft, &entry.direction]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if !details.is_empty() {
        line.push_str(&format!("  [{}]", details.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectorscope::geo::Point2LL;
    use sectorscope::reference::{Airport, Fix, Navaid};

    fn reference() -> ReferenceTables {
        let mut tables = ReferenceTables::new();
        tables.insert_navaid(Navaid {
            id: "JFK".to_string(),
            navtype: "VOR/DME".to_string(),
            name: "KENNEDY".to_string(),
            location: Point2LL::new(-73.5, 40.25),
        });
        tables.insert_fix(Fix {
            id: "MERIT".to_string(),
            location: Point2LL::new(-73.0, 41.0),
        });
        tables.insert_airport(Airport {
            id: "KJFK".to_string(),
            name: "JOHN F KENNEDY INTL".to_string(),
            location: Point2LL::new(-73.78, 40.64),
            elevation: 13,
        });
        tables
    }

    #[test]
    fn test_describe_navaid() {
        assert_eq!(
            describe(&reference(), "JFK").unwrap(),
            "JFK: 40.250000N, 73.500000W (VOR/DME KENNEDY)"
        );
    }

    #[test]
    fn test_describe_airport_and_fix() {
        let tables = reference();
        assert!(describe(&tables, "KJFK").unwrap().contains("elevation 13 ft"));
        assert!(describe(&tables, "MERIT").unwrap().ends_with("(fix)"));
        assert!(describe(&tables, "NOPE").is_none());
    }

    #[test]
    fn test_locate_not_found() {
        let result = run_locate(&reference(), "nope");
        assert!(matches!(result, Err(CliError::NotFound(_))));
    }

    #[test]
    fn test_format_route() {
        let entry = PrdEntry {
            route: "JFK MERIT HFD BOS".to_string(),
            altitude: "FL180".to_string(),
            direction: "NE".to_string(),
            ..Default::default()
        };
        assert_eq!(format_route(&entry), "JFK MERIT HFD BOS  [FL180, NE]");
        assert_eq!(
            format_route(&PrdEntry {
                route: "DIRECT".to_string(),
                ..Default::default()
            }),
            "DIRECT"
        );
    }
}
