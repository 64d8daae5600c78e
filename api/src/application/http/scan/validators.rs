use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterIngredientsQuery {
    /// Case-insensitive substring of the ingredient name.
    pub search: Option<String>,
    /// `all`, `good`, `moderate` or `bad`. Empty means all.
    pub risk: Option<String>,
}
