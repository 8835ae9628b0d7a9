//! Grounding prompt construction.

use crate::snapshot::CatalogSnapshot;

/// Format a minor-unit price as dollars, e.g. `1299` → `$12.99`.
pub fn format_usd(price_cents: u64) -> String {
    format!("${}.{:02}", price_cents / 100, price_cents % 100)
}

/// Build the system prompt constraining the backend to the snapshot.
pub fn system_prompt(snapshot: &CatalogSnapshot) -> String {
    let mut catalog = String::new();
    for item in &snapshot.items {
        catalog.push_str(&format!(
            "- {}: {} (ID: {}). {}\n",
            item.name,
            format_usd(item.price_cents),
            item.id,
            item.description,
        ));
    }

    format!(
        "You are a helpful shopping assistant for a marketplace.\n\
         You have access to the following list of AVAILABLE APPROVED products:\n\n\
         {catalog}\n\
         Rules:\n\
         1. Only recommend products from this list.\n\
         2. If a user asks for something not on the list, apologize and say it's not available.\n\
         3. Be concise, friendly, and helpful.\n\
         4. Do not make up prices or products.\n"
    )
}
