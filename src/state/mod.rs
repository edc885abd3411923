mod map;
mod ping;

pub use map::BeliefMap;
pub use ping::{PingResponse, PlayerId, Role};
