//! View-model assembly
//!
//! Read-only aggregation over the entity store: every public function takes
//! the pool plus the evaluation instant `now` and returns the denormalized
//! structure the external renderer consumes. No side effects.
//!
//! Boundary semantics are deliberately asymmetric and must stay that way:
//! listing/search counts treat a show starting exactly at `now` as not
//! upcoming (strict `>`), detail views treat it as upcoming (`>=`).

pub mod artists;
pub mod search;
pub mod shows;
pub mod venues;

pub use artists::{artist_detail, list_artists, ArtistDetail, ArtistListItem};
pub use search::{search_artists, search_venues, SearchHit, SearchResults};
pub use shows::{list_shows, ShowView};
pub use venues::{list_venues_grouped, venue_detail, CityGroup, VenueDetail, VenueListItem};
