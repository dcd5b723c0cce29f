//! Named-placeholder substitution for user-facing invitation text.

use crate::identity::UserRef;

/// Substitutes the recognized placeholders into `template`.
///
/// `{player}` / `{opponent}` expand to the mention form; `.tag` and
/// `.username` variants expand to the matching identity field. The dotted
/// forms are replaced first so the bare placeholder cannot swallow them.
pub fn render_template(template: &str, player: &UserRef, opponent: &UserRef) -> String {
    template
        .replace("{player.tag}", &player.tag)
        .replace("{player.username}", &player.username)
        .replace("{player}", &player.mention())
        .replace("{opponent.tag}", &opponent.tag)
        .replace("{opponent.username}", &opponent.username)
        .replace("{opponent}", &opponent.mention())
}
