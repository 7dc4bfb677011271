// Page fetching: the external collaborator that supplies document text.

pub mod http;
pub mod traits;
