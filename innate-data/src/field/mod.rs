mod terrain;
mod weather;

pub use terrain::TerrainType;
pub use weather::WeatherType;
