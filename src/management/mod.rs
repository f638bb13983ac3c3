mod session;

pub use session::ArtistChartSession;
pub use session::SessionManager;
pub use session::SessionState;
