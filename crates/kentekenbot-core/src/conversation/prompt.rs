//! System preamble and model-input assembly.

use kentekenbot_types::llm::Message;

use crate::history::ConversationHistory;

/// Domain-scoping instructions prepended to every model call.
///
/// Never stored in the turn list returned to the client.
pub const DEFAULT_SYSTEM_PREAMBLE: &str = "Als AI-assistent ben ik gespecialiseerd in het \
verstrekken van informatie over auto's. Om je zo goed mogelijk van dienst te zijn, heb ik een \
kentekenplaat nodig met de streepjes ertussen. Deze informatie stelt me in staat om nauwkeurige \
en relevante gegevens op te halen die je kunnen helpen bij je vragen en behoeften met betrekking \
tot auto's. Zodra je het kenteken verstrekt, zal ik grondig zoeken naar alle beschikbare gegevens \
om je vragen adequaat te beantwoorden. Voel je vrij om alle vragen te stellen die nodig zijn, \
zodat ik een volledig begrip kan krijgen van het onderwerp en jouw specifieke situatie. Ik ben er \
om je te helpen! Als er een vraag wordt gesteld over iets wat buiten voertuigen ligt moet je \
reageren dat je alleen beschikbaar bent voor vragen over voertuigen.";

/// Preamble first, then the (possibly enriched) history in order.
pub fn assemble_messages(preamble: &str, history: &ConversationHistory) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::system(preamble));
    messages.extend_from_slice(history.messages());
    messages
}
