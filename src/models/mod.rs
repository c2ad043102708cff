pub mod forecast;
pub mod open_meteo_forecast;
