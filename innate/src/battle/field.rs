use innate_data::{
    TerrainType,
    WeatherType,
};

/// Field-wide effects shared by both sides.
#[derive(Debug, Default, Clone)]
pub struct Field {
    pub weather: Option<WeatherType>,
    pub terrain: Option<TerrainType>,
}
