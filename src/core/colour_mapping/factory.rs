use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::EscapeColourMap;
use crate::core::colour_mapping::maps::{rainbow_wheel::RainbowWheel, wave::Wave};

#[must_use]
pub fn colour_map_factory(
    kind: ColourSchemeKind,
    max_iterations: u32,
    smoothing: f64,
) -> Box<dyn EscapeColourMap> {
    match kind {
        ColourSchemeKind::RainbowWheel => Box::new(RainbowWheel::new(max_iterations, smoothing)),
        ColourSchemeKind::Wave => Box::new(Wave::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourSchemeKind::ALL.first(),
            Some(&ColourSchemeKind::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourSchemeKind::ALL {
            let map = colour_map_factory(kind, 256, 1.5);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourSchemeKind::ALL {
            let map = colour_map_factory(kind, 256, 1.5);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourSchemeKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
