pub mod mock_auth;
pub mod params;
