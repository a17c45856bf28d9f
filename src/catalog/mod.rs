use crate::models::Product;

/// In-memory product catalog: an append-only, insertion-ordered sequence.
///
/// The catalog itself is synchronization-free; callers share it behind
/// `Arc<RwLock<..>>` (see `AppState`), and routing every mutation through the
/// write lock keeps id assignment unique and monotonic under concurrent
/// requests.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Catalog pre-loaded with the three fixed demo products. This is the
    /// state every process starts from; nothing is persisted across restarts.
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product { id: 1, name: "Notebook".to_string(), price: 3500.00, stock: 10 },
                Product { id: 2, name: "Mouse".to_string(), price: 50.00, stock: 50 },
                Product { id: 3, name: "Teclado".to_string(), price: 150.00, stock: 30 },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Linear scan by id; first match wins (ids are unique, so moot).
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Next id is recomputed from the current set rather than kept as a
    /// counter, so the rule stays correct if delete support ever lands.
    fn next_id(&self) -> u64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Append a new product with the next id and return a copy of it.
    pub fn create(&mut self, name: String, price: f64, stock: u32) -> Product {
        let product = Product {
            id: self.next_id(),
            name,
            price,
            stock,
        };
        self.products.push(product.clone());
        product
    }
}
