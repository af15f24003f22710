//! Client side of the tracker: a typed HTTP client, persisted preferences and
//! a state holder a UI can render from.

pub mod api_client;
pub mod preferences;
pub mod tracker_state;

pub use api_client::{ClientError, DEFAULT_BASE_URL, FmroApiClient, normalize_base_url};
pub use preferences::{LanguageMode, Preferences, PreferencesError, ThemeMode};
pub use tracker_state::{ALL_CITIES, ALL_STAGES, ApplicationItem, JobItem, ReviewItem, TrackerState};
