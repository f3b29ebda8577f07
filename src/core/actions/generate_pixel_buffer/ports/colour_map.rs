use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
