//! Rendering of proof trees.

use super::types::Proof;

/// Render a proof tree as indented text, conclusions first.
///
/// ```text
/// P(b)  [modus-ponens]
///   (implies P(a) P(b))  [rule]
///   P(a)  [rule]
/// ```
pub fn pretty_print(proof: &Proof) -> String {
    let mut out = String::new();
    render(proof, 0, &mut out);
    out
}

fn render(proof: &Proof, depth: usize, out: &mut String) {
    if depth > 0 {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&format!(
        "{}  [{}]",
        proof.conclusion(),
        proof.justification()
    ));
    for sub in proof.subproofs() {
        render(sub, depth + 1, out);
    }
}
