
use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
    pub count: usize,
}

pub async fn list(State(catalog): State<Arc<Catalog>>) -> Json<CategoryList> {
    Json(CategoryList { categories: catalog.categories(), count: catalog.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn count_matches_categories() {
        let Json(body) = list(State(Arc::new(Catalog::reference()))).await;
        assert_eq!(body.categories, vec!["tv", "mobile", "laptop"]);
        assert_eq!(body.count, 3);
    }
}
