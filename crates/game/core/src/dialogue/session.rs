//! Starting, driving and ending conversations.

use crate::dialogue::scripts::{self, ChoiceEffect};
use crate::engine::{GameEvent, set_mode};
use crate::env::GameEnv;
use crate::input::{Controls, FrameInput};
use crate::state::{
    Cell, Conversation, DialogueGraph, GameState, InputTimers, Mode, NpcId, PendingRemoval,
    Timestamp, items,
};

/// Opens the NPC's conversation and turns both actors to face each other.
///
/// The NPC's graph is fetched from the oracle on first contact and cached.
pub fn start_with_npc(
    state: &mut GameState,
    env: &GameEnv<'_>,
    id: NpcId,
    now: Timestamp,
    events: &mut Vec<GameEvent>,
) {
    let Some(npc) = state.npcs.get_mut(id.index()) else {
        return;
    };
    let npc_position = npc.position();
    npc.body.face_towards(state.player.position());
    npc.freeze();
    state.player.body.face_towards(npc_position);

    let name = npc.name.clone();
    let graph = state.dialogues.get_or_insert_with(&name, || {
        env.dialogues()
            .script(&name)
            .unwrap_or_else(|| scripts::fallback(&name))
    });
    let root = graph.root();
    let prompt = graph.node(root).map(|node| node.text.clone()).unwrap_or_default();

    state.conversation = Some(Conversation::with_npc(id, name, root));
    state.timers.last_choice = Some(now);
    set_mode(state, Mode::Chatting, events);
    events.push(GameEvent::ConversationStarted {
        partner: Some(id),
        prompt,
    });
}

/// Opens a one-off conversation about the tile in front of the player.
pub fn start_with_environment(
    state: &mut GameState,
    graph: DialogueGraph,
    pending_removal: Option<PendingRemoval>,
    now: Timestamp,
    events: &mut Vec<GameEvent>,
) {
    let prompt = graph
        .node(graph.root())
        .map(|node| node.text.clone())
        .unwrap_or_default();

    state.conversation = Some(Conversation::with_environment(graph, pending_removal));
    state.timers.last_choice = Some(now);
    set_mode(state, Mode::Chatting, events);
    events.push(GameEvent::ConversationStarted {
        partner: None,
        prompt,
    });
}

/// One frame of conversation input.
///
/// Up and down move the highlight with wraparound, confirm commits it. All
/// three share one rate limiter, so at most one of them acts per window.
pub fn update_conversation(
    state: &mut GameState,
    env: &GameEnv<'_>,
    input: &FrameInput,
    events: &mut Vec<GameEvent>,
) {
    let delay = env.config().input_delay_ms;
    let now = input.now;

    let Some(mut conversation) = state.conversation.take() else {
        set_mode(state, Mode::Exploring, events);
        return;
    };

    let node = conversation.node;
    let healed = conversation.graph_mut(&mut state.dialogues).map(|graph| {
        let patched = graph.ensure_exit(node);
        (patched, graph.node(node).map_or(0, |node| node.choices.len()))
    });
    let Some((patched, choice_count)) = healed else {
        end_conversation(state, env, conversation.partner(), now, events);
        return;
    };
    if patched {
        conversation.highlighted = 0;
    }
    if choice_count == 0 {
        end_conversation(state, env, conversation.partner(), now, events);
        return;
    }

    if input.held(Controls::UP) && InputTimers::elapsed(state.timers.last_choice, now, delay) {
        conversation.highlighted = (conversation.highlighted + choice_count - 1) % choice_count;
        state.timers.last_choice = Some(now);
        events.push(GameEvent::ChoiceHighlighted {
            index: conversation.highlighted,
        });
    }
    if input.held(Controls::DOWN) && InputTimers::elapsed(state.timers.last_choice, now, delay) {
        conversation.highlighted = (conversation.highlighted + 1) % choice_count;
        state.timers.last_choice = Some(now);
        events.push(GameEvent::ChoiceHighlighted {
            index: conversation.highlighted,
        });
    }
    if input.held(Controls::CONFIRM) && InputTimers::elapsed(state.timers.last_choice, now, delay)
    {
        state.timers.last_choice = Some(now);
        commit(state, env, conversation, now, events);
        return;
    }

    state.conversation = Some(conversation);
}

/// Applies the highlighted answer, then either ends or advances.
fn commit(
    state: &mut GameState,
    env: &GameEnv<'_>,
    mut conversation: Conversation,
    now: Timestamp,
    events: &mut Vec<GameEvent>,
) {
    let Some((prompt, choice)) = conversation.current(&state.dialogues).and_then(|node| {
        node.choices
            .get(conversation.highlighted)
            .map(|choice| (node.text.clone(), choice.clone()))
    }) else {
        end_conversation(state, env, conversation.partner(), now, events);
        return;
    };

    events.push(GameEvent::ChoiceCommitted {
        prompt: prompt.clone(),
        choice: choice.text.clone(),
    });

    match ChoiceEffect::lookup(&prompt, &choice.text) {
        Some(ChoiceEffect::FellTree) => {
            if let Some(pending) = conversation.pending_removal.take() {
                fell_tree(state, env, pending, events);
            }
        }
        Some(ChoiceEffect::CatchFish) => {
            gain(state, items::FISH, 1, events);
        }
        None => {}
    }

    match choice.next {
        Some(next) if !choice.ends_conversation() => {
            conversation.node = next;
            conversation.highlighted = 0;
            state.conversation = Some(conversation);
        }
        _ => end_conversation(state, env, conversation.partner(), now, events),
    }
}

fn fell_tree(
    state: &mut GameState,
    env: &GameEnv<'_>,
    pending: PendingRemoval,
    events: &mut Vec<GameEvent>,
) {
    if state.map.clear_tile(pending.layer, pending.index).is_none() {
        return;
    }
    let width = state.map.width() as usize;
    events.push(GameEvent::TreeFelled {
        cell: Cell::new((pending.index % width) as i32, (pending.index / width) as i32),
    });
    gain(state, items::WOOD, env.config().wood_per_tree, events);
}

fn gain(state: &mut GameState, item: &str, count: u32, events: &mut Vec<GameEvent>) {
    let stored = state.inventory.add(item, count);
    if stored > 0 {
        events.push(GameEvent::ItemsGained {
            item: item.to_owned(),
            count: stored,
        });
    }
}

/// Closes the conversation, starts the interaction cooldown and rewards the
/// social bar.
pub fn end_conversation(
    state: &mut GameState,
    env: &GameEnv<'_>,
    partner: Option<NpcId>,
    now: Timestamp,
    events: &mut Vec<GameEvent>,
) {
    state.conversation = None;
    state.timers.last_chat_end = Some(now);
    state.needs.social.add(env.config().social_per_chat);
    set_mode(state, Mode::Exploring, events);
    events.push(GameEvent::ConversationEnded { partner });
}
