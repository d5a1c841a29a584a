pub mod breeds;
