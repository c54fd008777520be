use syzygy_core::Mode;

/// Column layout of a light-curve CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvLayout {
    /// `time,flux`
    Flux,
    /// `time,flux,umbra_frac,penumbra_frac`
    WithShadowFractions,
}

pub const FLUX_COLUMNS: [&str; 2] = ["time", "flux"];
pub const SHADOW_COLUMNS: [&str; 4] = ["time", "flux", "umbra_frac", "penumbra_frac"];

impl CsvLayout {
    /// Solar curves carry no shadow fractions.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Solar => CsvLayout::Flux,
            Mode::Lunar => CsvLayout::WithShadowFractions,
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            CsvLayout::Flux => &FLUX_COLUMNS,
            CsvLayout::WithShadowFractions => &SHADOW_COLUMNS,
        }
    }

    pub fn header(self) -> String {
        self.columns().join(",")
    }

    /// Recognise a header row from its column names. Surrounding whitespace
    /// is ignored.
    pub fn from_columns<'a>(columns: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let columns: Vec<&str> = columns.into_iter().map(str::trim).collect();
        [CsvLayout::Flux, CsvLayout::WithShadowFractions]
            .into_iter()
            .find(|layout| layout.columns() == columns.as_slice())
    }
}

/// Suggested download name for a mode's light curve.
pub fn default_file_name(mode: Mode) -> String {
    format!("{}_light_curve.csv", mode.name())
}
