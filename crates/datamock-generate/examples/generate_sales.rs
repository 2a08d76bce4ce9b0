use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use datamock_core::Schema;
use datamock_generate::generate;

fn main() {
    let schema = Schema::from_value(json!({
        "business": {"type": "string", "loopOrder": 1, "enumeratedValues": ["retail", "wholesale"]},
        "product": {"type": "string", "loopOrder": 2, "enumeratedValues": ["basic", "plus", "premium"]},
        "date": {"type": "date", "loopOrder": 3, "min": "2024-03-01", "max": "2024-03-05"},
        "amount": {"type": "decimal", "min": 10.0, "max": 500.0, "random": true},
        "quantity": {"type": "integer", "min": 1, "max": 99, "random": true},
        "updatedAt": {"type": "datetime"}
    }))
    .expect("valid schema");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let records = generate(&schema, &mut rng).expect("generate records");

    let json = serde_json::to_string_pretty(&records).expect("serialize records");
    println!("{json}");
}
