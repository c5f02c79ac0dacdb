mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    ChartConfig, Config, DEFAULT_DATE_FORMAT, DEFAULT_PALETTE, DataConfig, HoverConfig, Margin,
    MiniChartConfig, PaletteConfig, PaletteOverflow,
};
pub use validation::{validate_config_semantics, validate_date_format};
