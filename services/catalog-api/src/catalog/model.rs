
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog item. `id` is only unique within the owning category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub brand: String,
    /// Free-form attributes; the key set differs per category.
    pub specs: Map<String, Value>,
}

impl Product {
    pub fn new(id: u64, name: &str, price: f64, brand: &str, specs: Map<String, Value>) -> Self {
        Self { id, name: name.into(), price, brand: brand.into(), specs }
    }
}

/// Named, ordered group of products. The name is always stored lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    products: Vec<Product>,
}

impl Category {
    pub fn new(name: &str, products: Vec<Product>) -> Self {
        Self { name: name.to_lowercase(), products }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in declaration order, each tagged with this category.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.products.iter().map(|product| CatalogEntry { product, category: &self.name })
    }
}

/// Response view of a product: every stored field plus the category it was found under.
/// Borrows the stored record, so rendering never touches the catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub category: &'a str,
}

/// Unwraps a `json!({...})` literal into a specs map.
pub(crate) fn specs(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product::new(7, "Widget", 10.5, "Acme", specs(json!({"color": "red", "wireless": true})))
    }

    #[test]
    fn category_name_is_lowercased() {
        let c = Category::new("Tablet", vec![]);
        assert_eq!(c.name(), "tablet");
    }

    #[test]
    fn entry_serializes_all_fields_plus_category() {
        let p = sample();
        let v = serde_json::to_value(CatalogEntry { product: &p, category: "gadget" }).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 7,
                "name": "Widget",
                "price": 10.5,
                "brand": "Acme",
                "specs": {"color": "red", "wireless": true},
                "category": "gadget"
            })
        );
    }

    #[test]
    fn entries_leave_stored_record_untouched() {
        let c = Category::new("gadget", vec![sample()]);
        let before = c.clone();
        let rendered: Vec<_> = c.entries().map(|e| serde_json::to_value(e).unwrap()).collect();
        assert_eq!(rendered.len(), 1);
        assert_eq!(c, before);
        assert!(serde_json::to_value(&c.products()[0]).unwrap().get("category").is_none());
    }

    #[test]
    fn non_object_specs_become_empty() {
        assert!(specs(json!([1, 2])).is_empty());
    }
}
