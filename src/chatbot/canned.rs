/**
 * Canned Answers
 *
 * Fixed, pre-written responses returned verbatim when the user's message
 * exactly matches a known trigger phrase. A canned hit bypasses the
 * generative backend entirely and does not touch the failure counter.
 *
 * Matching is exact on the lower-cased, trimmed message. Substring
 * matching is deliberately not used: it false-positives on any message
 * that merely contains a trigger word.
 */

/// Known trigger phrases and their fixed replies
const CANNED_ANSWERS: &[(&str, &str)] = &[
    (
        "hola",
        "¡Hola! Soy Eyebot, tu psicólogo virtual. ¿En qué puedo ayudarte hoy?",
    ),
    (
        "buenos dias",
        "¡Buenos días! Soy Eyebot. ¿Cómo te encuentras hoy?",
    ),
    (
        "buenas tardes",
        "¡Buenas tardes! Soy Eyebot. ¿En qué puedo ayudarte?",
    ),
    ("gracias", "¡De nada! Estoy aquí para ayudarte cuando lo necesites."),
    (
        "cuantos balones de oro tiene cr7",
        "Cristiano Ronaldo tiene 5 Balones de Oro en su carrera.",
    ),
    (
        "balones de oro cristiano ronaldo",
        "Cristiano Ronaldo ha ganado 5 Balones de Oro.",
    ),
    ("cr7 balones de oro", "CR7 tiene 5 Balones de Oro."),
];

/// Look up a canned reply for a message
///
/// Returns the fixed text when the lower-cased, trimmed message exactly
/// matches a known trigger phrase.
pub fn canned_reply(message: &str) -> Option<&'static str> {
    let normalized = message.trim().to_lowercase();
    CANNED_ANSWERS
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, reply)| *reply)
}
