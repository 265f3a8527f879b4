//! System prompt rendering.
//!
//! Turns catalog and FAQ content into the instruction text injected as the
//! first turn of every new session.

use std::fmt::Write;

use parley_types::catalog::Catalog;

/// Render the system instruction for `catalog`.
pub fn render_system_prompt(catalog: &Catalog) -> String {
    let mut prompt = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(
        prompt,
        "Eres un asistente conciso y claro de {}. Responde con frases breves, sin saltos de línea innecesarios.",
        catalog.brand
    );
    prompt.push_str(
        "Usa <strong> solo si es necesario, sin agregar saltos de línea después de etiquetas HTML.\n",
    );

    prompt.push_str("\nCatálogo:\n");
    for product in &catalog.products {
        let _ = writeln!(
            prompt,
            "- {}: {} – {}",
            product.name, product.price, product.description
        );
    }

    if !catalog.faq.is_empty() {
        prompt.push_str("\nFAQs:\n");
        for entry in &catalog.faq {
            let _ = writeln!(prompt, "- {}: {}", entry.topic, entry.answer);
        }
    }

    prompt.push_str(
        "\nSi no sabes la respuesta, sugiere contactar al equipo humano. Responde de forma breve y útil.\n",
    );
    prompt
}
