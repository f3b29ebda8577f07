use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::data::colour::Colour;

pub trait EscapeColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> ColourSchemeKind;
}

impl ColourMap<u32> for Box<dyn EscapeColourMap> {
    fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
