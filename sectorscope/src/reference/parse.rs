//! Row decoding for each reference table.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use tracing::{error, warn};

use super::source::{dms_fields, field, for_each_record, stop_shouting};
use super::types::{Airport, AirportPair, Callsign, Fix, Navaid, PrdEntry};
use crate::geo::Point2LL;

const FEET_PER_METER: f64 = 3.28084;

/// Decode a NASR `NAV_BASE.csv` table.
pub fn parse_navaids<R: Read>(reader: R, navaids: &mut HashMap<String, Navaid>) {
    for_each_record("navaids", reader, 30, |r| {
        let id = field(r, 1);
        if id.is_empty() {
            return;
        }
        let Some(location) = Point2LL::from_dms_components(dms_fields(r, 22), dms_fields(r, 26))
        else {
            warn!(id, "Skipping navaid with malformed location");
            return;
        };
        navaids.insert(
            id.to_string(),
            Navaid {
                id: id.to_string(),
                navtype: field(r, 2).to_string(),
                name: field(r, 7).to_string(),
                location,
            },
        );
    });
}

/// Decode a NASR `APT_BASE.csv` table.
pub fn parse_faa_airports<R: Read>(reader: R, airports: &mut HashMap<String, Airport>) {
    for_each_record("airports", reader, 99, |r| {
        let elevation: f64 = match field(r, 24).trim().parse() {
            Ok(e) => e,
            Err(e) => {
                error!(value = field(r, 24), error = %e, "Error parsing elevation");
                return;
            }
        };
        let id = field(r, 98);
        if id.is_empty() {
            return;
        }
        let Some(location) = Point2LL::from_dms_components(dms_fields(r, 15), dms_fields(r, 19))
        else {
            warn!(id, "Skipping airport with malformed location");
            return;
        };
        airports.insert(
            id.to_string(),
            Airport {
                id: id.to_string(),
                name: field(r, 12).to_string(),
                location,
                elevation: elevation as i32,
            },
        );
    });
}

/// Decode the colon-separated `GlobalAirportDatabase.txt`.
///
/// Entries replace FAA entries with the same id.
pub fn parse_global_airports<R: Read>(reader: R, airports: &mut HashMap<String, Airport>) {
    for (n, line) in BufReader::new(reader).lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!(line = n + 1, error = %e, "Error reading global airport database");
                return;
            }
        };
        if line.is_empty() {
            continue;
        }

        let f: Vec<&str> = line.split(':').collect();
        if f.len() != 16 {
            warn!(line = n + 1, fields = f.len(), "Expected 16 fields");
            continue;
        }

        let elevation: f64 = match f[13].trim().parse() {
            Ok(e) => e,
            Err(e) => {
                error!(value = f[13], error = %e, "Error parsing elevation");
                continue;
            }
        };
        let id = f[0];
        if id.is_empty() {
            continue;
        }
        let Some(location) = Point2LL::from_decimal_strings(f[14], f[15]) else {
            warn!(id, "Skipping airport with malformed location");
            continue;
        };
        airports.insert(
            id.to_string(),
            Airport {
                id: id.to_string(),
                name: f[2].to_string(),
                location,
                elevation: (elevation * FEET_PER_METER) as i32,
            },
        );
    }
}

/// Decode a NASR `FIX_BASE.csv` table.
pub fn parse_fixes<R: Read>(reader: R, fixes: &mut HashMap<String, Fix>) {
    for_each_record("fixes", reader, 13, |r| {
        let id = field(r, 1);
        if id.is_empty() {
            return;
        }
        let Some(location) = Point2LL::from_dms_components(dms_fields(r, 5), dms_fields(r, 9))
        else {
            warn!(id, "Skipping fix with malformed location");
            return;
        };
        fixes.insert(
            id.to_string(),
            Fix {
                id: id.to_string(),
                location,
            },
        );
    });
}

/// Decode the preferred route database.
pub fn parse_prd<R: Read>(reader: R, prd: &mut HashMap<AirportPair, Vec<PrdEntry>>) {
    for_each_record("prd", reader, 14, |r| {
        let s = |i| field(r, i).to_string();
        let entry = PrdEntry {
            depart: s(0),
            route: s(1),
            arrive: s(2),
            hours: [s(3), s(4), s(5)],
            route_type: s(6),
            area: s(7),
            altitude: s(8),
            aircraft: s(9),
            direction: s(10),
            seq: s(11),
            depart_center: s(12),
            arrive_center: s(13),
        };
        if entry.depart.is_empty() || entry.arrive.is_empty() {
            return;
        }
        prd.entry(AirportPair::new(&entry.depart, &entry.arrive))
            .or_default()
            .push(entry);
    });
}

/// Decode a callsign table. Later tables override earlier ones.
pub fn parse_callsigns<R: Read>(table: &str, reader: R, callsigns: &mut HashMap<String, Callsign>) {
    for_each_record(table, reader, 4, |r| {
        let fix = |i| stop_shouting(field(r, i).trim());
        let three_letter = field(r, 3).trim();
        if three_letter.is_empty() || three_letter == "..." {
            return;
        }
        callsigns.insert(
            three_letter.to_string(),
            Callsign {
                company: fix(0),
                country: fix(1),
                telephony: fix(2),
                three_letter: three_letter.to_string(),
            },
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A CSV row with `n` empty columns, overwritten at the given indices.
    fn row(n: usize, values: &[(usize, &str)]) -> String {
        let mut cols = vec![String::new(); n];
        for (i, v) in values {
            cols[*i] = v.to_string();
        }
        cols.join(",")
    }

    fn header(n: usize) -> String {
        (0..n).map(|i| format!("c{i}")).collect::<Vec<_>>().join(",")
    }

    #[test]
    fn test_parse_navaids() {
        let data = format!(
            "{}\n{}\n{}\n",
            header(30),
            row(
                30,
                &[
                    (1, "JFK"),
                    (2, "VOR/DME"),
                    (7, "KENNEDY"),
                    (22, "40"),
                    (23, "37"),
                    (24, "58.4"),
                    (25, "N"),
                    (26, "73"),
                    (27, "46"),
                    (28, "17.0"),
                    (29, "W"),
                ]
            ),
            row(30, &[(2, "NDB")]),
        );

        let mut navaids = HashMap::new();
        parse_navaids(data.as_bytes(), &mut navaids);

        assert_eq!(navaids.len(), 1);
        let jfk = &navaids["JFK"];
        assert_eq!(jfk.navtype, "VOR/DME");
        assert_eq!(jfk.name, "KENNEDY");
        assert!((jfk.location.lat - 40.6329).abs() < 1e-3);
        assert!(jfk.location.lon < 0.0);
    }

    #[test]
    fn test_parse_faa_airports_skips_bad_elevation() {
        let dms = [
            (15, "40"),
            (16, "38"),
            (17, "23"),
            (18, "N"),
            (19, "73"),
            (20, "46"),
            (21, "44"),
            (22, "W"),
        ];
        let mut good = dms.to_vec();
        good.extend([(12, "JOHN F KENNEDY INTL"), (24, "13"), (98, "KJFK")]);
        let mut bad = dms.to_vec();
        bad.extend([(24, "n/a"), (98, "KLGA")]);

        let data = format!("{}\n{}\n{}\n", header(99), row(99, &good), row(99, &bad));
        let mut airports = HashMap::new();
        parse_faa_airports(data.as_bytes(), &mut airports);

        assert_eq!(airports.len(), 1);
        assert_eq!(airports["KJFK"].elevation, 13);
        assert_eq!(airports["KJFK"].name, "JOHN F KENNEDY INTL");
    }

    #[test]
    fn test_parse_global_airports_converts_meters() {
        let data = "\
EGLL:LHR:LONDON HEATHROW:LONDON:ENGLAND:051:028:039:N:000:027:041:W:00025:51.478:-0.461
SHORT:LINE
";
        let mut airports = HashMap::new();
        parse_global_airports(data.as_bytes(), &mut airports);

        assert_eq!(airports.len(), 1);
        let egll = &airports["EGLL"];
        assert_eq!(egll.name, "LONDON HEATHROW");
        assert_eq!(egll.elevation, 82);
        assert!((egll.location.lat - 51.478).abs() < 1e-4);
    }

    #[test]
    fn test_global_airports_override_faa() {
        let mut airports = HashMap::new();
        airports.insert(
            "EGLL".to_string(),
            Airport {
                id: "EGLL".to_string(),
                name: "old".to_string(),
                location: Point2LL::default(),
                elevation: 0,
            },
        );
        let data = "EGLL:LHR:HEATHROW:::::::::::10:51.0:-0.5\n";
        parse_global_airports(data.as_bytes(), &mut airports);
        assert_eq!(airports["EGLL"].name, "HEATHROW");
    }

    #[test]
    fn test_parse_fixes() {
        let data = format!(
            "{}\n{}\n",
            header(13),
            row(
                13,
                &[
                    (1, "MERIT"),
                    (5, "41"),
                    (6, "22"),
                    (7, "55.0"),
                    (8, "N"),
                    (9, "73"),
                    (10, "08"),
                    (11, "14.0"),
                    (12, "W"),
                ]
            )
        );
        let mut fixes = HashMap::new();
        parse_fixes(data.as_bytes(), &mut fixes);
        assert!((fixes["MERIT"].location.lat - 41.3819).abs() < 1e-3);
    }

    #[test]
    fn test_parse_prd_groups_by_pair() {
        let data = format!(
            "{}\n{}\n{}\n{}\n",
            header(14),
            row(14, &[(0, "JFK"), (1, "JFK MERIT BOS"), (2, "BOS")]),
            row(14, &[(0, "JFK"), (1, "JFK HFD BOS"), (2, "BOS"), (11, "2")]),
            row(14, &[(0, "JFK"), (1, "NOWHERE")]),
        );
        let mut prd = HashMap::new();
        parse_prd(data.as_bytes(), &mut prd);

        assert_eq!(prd.len(), 1);
        let routes = &prd[&AirportPair::new("JFK", "BOS")];
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1].seq, "2");
    }

    #[test]
    fn test_parse_callsigns_virtual_takes_precedence() {
        let real = "company,country,telephony,code\n\
                    AMERICAN AIRLINES , UNITED STATES ,AMERICAN,AAL\n\
                    NOBODY,NOWHERE,NONE,...\n\
                    BLANK,NOWHERE,NONE,\n";
        let virt = "company,country,telephony,code\nVIRTUAL AMERICAN,INTERNET,VAMERICAN,AAL\n";

        let mut callsigns = HashMap::new();
        parse_callsigns("callsigns", real.as_bytes(), &mut callsigns);
        assert_eq!(callsigns.len(), 1);
        assert_eq!(callsigns["AAL"].company, "American Airlines");
        assert_eq!(callsigns["AAL"].country, "United States");

        parse_callsigns("virtual callsigns", virt.as_bytes(), &mut callsigns);
        assert_eq!(callsigns["AAL"].telephony, "Vamerican");
    }
}
