// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://gateway.marvel.com";
pub const CHARACTERS_PATH: &str = "/v1/public/characters";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("comic_recs/", env!("CARGO_PKG_VERSION"));

// Catalog paging
pub const PAGE_SIZE: u32 = 100;
pub const CHARACTER_CEILING: u32 = 2000; // raw entities, pre-dedup

// Comics query
pub const DEFAULT_COMIC_LIMIT: u32 = 10;
pub const ORDER_BY_ONSALE_DESC: &str = "-onsaleDate";

// Shaping
pub const NO_DESCRIPTION: &str = "No description";
pub const DETAIL_URL_TYPE: &str = "detail";

// Credentials
pub const ENV_PUBLIC_KEY: &str = "MARVEL_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "MARVEL_PRIVATE_KEY";
pub const ENV_API_BASE: &str = "MARVEL_API_BASE";
pub const KEYS_FILE: &str = "marvel_keys.cfg";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_HEADERS: [&str; 4] = ["Title", "Description", "Image URL", "Detail Page"];
pub const EXPORT_SUFFIX: &str = "_comics";
pub const EXPORT_EXT: &str = "csv";
