#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSchemeKind {
    #[default]
    RainbowWheel,
    Wave,
}

impl ColourSchemeKind {
    pub const ALL: &'static [Self] = &[Self::RainbowWheel, Self::Wave];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RainbowWheel => "Rainbow wheel",
            Self::Wave => "Wave",
        }
    }
}

impl std::fmt::Display for ColourSchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
