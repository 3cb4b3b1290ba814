#[cfg(test)]
mod tests {
    use super::super::convert::{convert, convert_text};
    use super::super::error::ConversionError;
    use super::super::formatter::{format, FormatPolicy};
    use super::super::table::ConversionTable;
    use crate::catalog::Catalog;

    const SAMPLES: [f64; 6] = [1e-9, 0.25, 1.0, 7.5, 1234.5, 6.02e23];

    fn close(a: f64, b: f64, rel: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    fn table(id: &str) -> &'static ConversionTable {
        Catalog::global().table(id).unwrap()
    }

    fn for_each_pair(mut check: impl FnMut(&ConversionTable, &str, &str)) {
        for table in Catalog::global().iter() {
            for from in table.units() {
                for to in table.units() {
                    check(table, &from.key, &to.key);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_through_base() {
        for_each_pair(|table, from, to| {
            let base = table.base().key();
            for x in SAMPLES {
                let via_base =
                    convert(convert(x, from, base, table).unwrap(), base, to, table).unwrap();
                let direct = convert(x, from, to, table).unwrap();
                assert!(
                    close(via_base, direct, 1e-12),
                    "{}: {} {} -> {} gave {} vs {}",
                    table.id(),
                    x,
                    from,
                    to,
                    via_base,
                    direct
                );
            }
        });
    }

    #[test]
    fn test_identity_is_exact() {
        for table in Catalog::global().iter() {
            for unit in table.units() {
                for x in SAMPLES.iter().chain([-3.3, 0.1 + 0.2].iter()) {
                    if *x < 0.0 && table.is_non_negative() {
                        continue;
                    }
                    assert_eq!(convert(*x, &unit.key, &unit.key, table).unwrap(), *x);
                }
            }
        }
    }

    #[test]
    fn test_inverse_consistency() {
        for_each_pair(|table, from, to| {
            for x in SAMPLES {
                let there = convert(x, from, to, table).unwrap();
                let back = convert(there, to, from, table).unwrap();
                assert!(
                    close(back, x, 1e-9),
                    "{}: {} {} -> {} -> {} = {}",
                    table.id(),
                    x,
                    from,
                    to,
                    from,
                    back
                );
            }
        });
    }

    #[test]
    fn test_scale_invariance() {
        for_each_pair(|table, from, to| {
            for k in [2.0, 0.001, 1e6] {
                let x = 3.7;
                let scaled = convert(k * x, from, to, table).unwrap();
                let expected = k * convert(x, from, to, table).unwrap();
                assert!(close(scaled, expected, 1e-12), "{}: {} -> {}", table.id(), from, to);
            }
        });
    }

    #[test]
    fn test_format_bucket_boundaries() {
        let policy = FormatPolicy::default();
        // Just below the scientific threshold
        assert_eq!(format(9.9e-7), "9.9e-7");
        assert_eq!(policy.decimals_for(1.1e-6), 8);
        assert_eq!(format(1.1e-6), "0.0000011");

        let edges = [(1e-3, 8, 6), (1.0, 6, 4), (10.0, 4, 3), (100.0, 3, 2), (1e3, 2, 1), (1e5, 1, 0)];
        for (edge, below, above) in edges {
            assert_eq!(policy.decimals_for(edge * 0.99), below, "below {}", edge);
            assert_eq!(policy.decimals_for(edge * 1.01), above, "above {}", edge);
        }

        assert_eq!(format(999_999.0), "999999");
        assert_eq!(format(1.01e6), "1.01e6");
    }

    #[test]
    fn test_invalid_input_rejection() {
        let resistance = table("electric-resistance");
        let result = convert_text("abc", "Ω", "kΩ", resistance);
        assert!(matches!(result, Err(ConversionError::InvalidInput(ref s)) if s == "abc"));
        assert!(matches!(
            convert(f64::NAN, "Ω", "kΩ", resistance),
            Err(ConversionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_rejection_for_constrained_quantities() {
        for (id, from, to) in [
            ("density", "kg/m³", "g/cm³"),
            ("absorbed-dose", "Gy", "rad"),
            ("radioactivity", "Ci", "Bq"),
            ("volume", "L", "gal"),
        ] {
            let result = convert(-5.0, from, to, table(id));
            assert!(
                matches!(result, Err(ConversionError::DomainViolation { value, .. }) if value == -5.0),
                "{} should reject negatives",
                id
            );
        }

        // Unconstrained quantities accept negatives
        assert_eq!(convert(-5.0, "kV", "V", table("voltage")).unwrap(), -5000.0);
    }

    #[test]
    fn test_unknown_unit() {
        let result = convert(1.0, "Ω", "furlong", table("electric-resistance"));
        assert_eq!(
            result,
            Err(ConversionError::UnknownUnit {
                quantity: "Electric Resistance".to_string(),
                unit: "furlong".to_string(),
            })
        );
    }

    #[test]
    fn test_resistance_scenarios() {
        let t = table("electric-resistance");
        assert_eq!(convert(1000.0, "Ω", "kΩ", t).unwrap(), 1.0);
        assert_eq!(convert(1.0, "kΩ", "Ω", t).unwrap(), 1000.0);
        assert_eq!(convert(1.0, "kohm", "ohm", t).unwrap(), 1000.0);
    }

    #[test]
    fn test_viscosity_scenario() {
        let t = table("dynamic-viscosity");
        assert!(close(convert(1.0, "Pa·s", "cP", t).unwrap(), 1000.0, 1e-12));
        assert_eq!(convert_text("1", "Pa·s", "cP", t).unwrap().formatted, "1000");
    }

    #[test]
    fn test_flux_density_scenario() {
        let t = table("magnetic-flux-density");
        assert!(close(convert(1.0, "T", "G", t).unwrap(), 10000.0, 1e-12));
        assert_eq!(convert_text("1", "T", "G", t).unwrap().formatted, "10000");
    }

    #[test]
    fn test_published_cgs_factors() {
        let conductance = table("electric-conductance");
        assert!(close(
            convert(1.0, "statmho", "S", conductance).unwrap(),
            1.112650056e-12,
            1e-15
        ));
        let permeability = table("permeability");
        assert!(close(
            convert(1000.0, "mD", "D", permeability).unwrap(),
            1.0,
            1e-12
        ));
    }
}
