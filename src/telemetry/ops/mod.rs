pub mod scrape;
pub mod serve;
pub mod browse;
