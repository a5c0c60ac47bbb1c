
use serde_json::json;

use super::model::{specs, Category, Product};

/// The built-in dataset served by the API, in declaration order.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("tv", vec![
            Product::new(1, "Samsung 55-inch QLED TV", 1299.99, "Samsung", specs(json!({
                "screen_size": "55 inches",
                "resolution": "4K UHD",
                "display_type": "QLED",
                "smart_tv": true,
                "hdr": true
            }))),
            Product::new(2, "LG 65-inch OLED TV", 1999.99, "LG", specs(json!({
                "screen_size": "65 inches",
                "resolution": "4K UHD",
                "display_type": "OLED",
                "smart_tv": true,
                "hdr": true
            }))),
            Product::new(3, "Sony 43-inch LED TV", 599.99, "Sony", specs(json!({
                "screen_size": "43 inches",
                "resolution": "Full HD",
                "display_type": "LED",
                "smart_tv": true,
                "hdr": false
            }))),
        ]),
        Category::new("mobile", vec![
            Product::new(1, "iPhone 15 Pro", 999.99, "Apple", specs(json!({
                "storage": "128GB",
                "ram": "8GB",
                "screen_size": "6.1 inches",
                "camera": "48MP",
                "battery": "3274 mAh"
            }))),
            Product::new(2, "Samsung Galaxy S24", 899.99, "Samsung", specs(json!({
                "storage": "256GB",
                "ram": "8GB",
                "screen_size": "6.2 inches",
                "camera": "50MP",
                "battery": "4000 mAh"
            }))),
            Product::new(3, "Google Pixel 8", 699.99, "Google", specs(json!({
                "storage": "128GB",
                "ram": "8GB",
                "screen_size": "6.2 inches",
                "camera": "50MP",
                "battery": "4575 mAh"
            }))),
        ]),
        Category::new("laptop", vec![
            Product::new(1, "MacBook Pro 14-inch", 1999.99, "Apple", specs(json!({
                "processor": "Apple M3",
                "ram": "16GB",
                "storage": "512GB SSD",
                "screen_size": "14.2 inches",
                "graphics": "Integrated"
            }))),
            Product::new(2, "Dell XPS 15", 1799.99, "Dell", specs(json!({
                "processor": "Intel Core i7",
                "ram": "16GB",
                "storage": "512GB SSD",
                "screen_size": "15.6 inches",
                "graphics": "NVIDIA RTX 4050"
            }))),
        ]),
    ]
}
