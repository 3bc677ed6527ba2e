//! End-to-end interaction workflows through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use truhe_core::{Ability, Actor, ActorId, DiceExpr, Item, ItemId, Scene, Token, TokenId};
use truhe_interact::{
    CardAction, CardOutcome, ChatLog, DispatchOutcome, EntryOutcome, InteractConfig,
    InteractContext, Macros, Notices, PointerEvent, ScriptedPrompt, Selection, User, dialog,
};

struct Table {
    scene: Scene,
    user: User,
    selection: Selection,
    config: InteractConfig,
    chat: ChatLog,
    notices: Notices,
    macros: Macros,
    prompt: ScriptedPrompt,
    rng: StdRng,
    chest_token: TokenId,
    hero_token: TokenId,
    hero_actor: ActorId,
    sword: ItemId,
    tome: ItemId,
    needle: ItemId,
    pouch: ItemId,
}

impl Table {
    fn new() -> Self {
        let mut scene = Scene::new("Crypt");

        let mut chest = Actor::new("Old Chest");
        let sword = chest.add_item(Item::weapon("Rusty Sword", 1, DiceExpr::new(1, 8, 0)));
        let tome = chest.add_item(Item::check("Dusty Tome", Ability::Intelligence));
        let needle = chest.add_item(Item::save("Poison Needle", Ability::Constitution));
        let pouch = chest.add_item(Item::loot("Gold Pouch", Some("found-gold".to_string())));
        let chest_actor = scene.add_actor(chest).unwrap();

        let hero = Actor::new("Kara")
            .with_ability(Ability::Intelligence, 3)
            .with_ability(Ability::Constitution, 1);
        let hero_actor = scene.add_actor(hero).unwrap();

        let chest_token = scene
            .add_token(Token::new("Old Chest", chest_actor).environment())
            .unwrap();
        let hero_token = scene
            .add_token(Token::new("Kara", hero_actor).owned_by("alice"))
            .unwrap();

        let mut macros = Macros::new();
        macros.register("found-gold", "A pouch of coins spills open.");

        let mut selection = Selection::new();
        selection.select(hero_token);

        Self {
            scene,
            user: User::new("alice"),
            selection,
            config: InteractConfig::default(),
            chat: ChatLog::new(),
            notices: Notices::new(),
            macros,
            prompt: ScriptedPrompt::new(),
            rng: StdRng::seed_from_u64(42),
            chest_token,
            hero_token,
            hero_actor,
            sword,
            tome,
            needle,
            pouch,
        }
    }

    fn ctx(&mut self) -> InteractContext<'_> {
        InteractContext {
            scene: &mut self.scene,
            user: &self.user,
            selection: &self.selection,
            config: &self.config,
            chat: &mut self.chat,
            notices: &mut self.notices,
            macros: &mut self.macros,
            prompt: &mut self.prompt,
            rng: &mut self.rng,
        }
    }

    fn hero_items(&self) -> usize {
        self.scene.actor(self.hero_actor).unwrap().items.len()
    }

    /// Open the dialog, use the item, and return the use card's message.
    fn use_item(&mut self, item: ItemId) -> truhe_interact::MessageId {
        let chest = self.chest_token;
        let mut dlg = dialog::open_dialog(&self.ctx(), chest, &PointerEvent::at(10, 10)).unwrap();
        match dialog::click_entry(&mut self.ctx(), &mut dlg, item).unwrap() {
            EntryOutcome::Used { message, .. } => message,
            EntryOutcome::NoInteractor => panic!("interactor was selected"),
        }
    }
}

#[test]
fn weapon_attack_then_damage_leaves_no_clone() {
    let mut table = Table::new();
    let sword = table.sword;
    let message = table.use_item(sword);
    assert_eq!(table.hero_items(), 0);

    for action in [CardAction::Attack, CardAction::Damage] {
        let outcome = dialog::handle_card_action(
            &mut table.ctx(),
            message,
            action,
            &PointerEvent::at(10, 10),
        )
        .unwrap();
        assert!(matches!(
            outcome,
            CardOutcome::Handled(DispatchOutcome::Rolled(_))
        ));
        assert_eq!(table.hero_items(), 0);
    }

    // Use card + attack card + damage card
    assert_eq!(table.chat.len(), 3);
}

#[test]
fn every_action_kind_cleans_up() {
    for (pick, action) in [
        (0usize, CardAction::Attack),
        (0, CardAction::Damage),
        (1, CardAction::Check),
        (2, CardAction::Save),
    ] {
        let mut table = Table::new();
        let item = [table.sword, table.tome, table.needle][pick];
        let message = table.use_item(item);

        dialog::handle_card_action(&mut table.ctx(), message, action, &PointerEvent::at(0, 0))
            .unwrap();
        assert_eq!(table.hero_items(), 0, "clone leaked after {action}");
    }
}

#[test]
fn attack_cancel_produces_no_roll_and_no_clone() {
    let mut table = Table::new();
    table.config = InteractConfig::default().with_auto_proficiency(false);
    let sword = table.sword;
    let message = table.use_item(sword);
    let chat_before = table.chat.len();

    table.prompt = ScriptedPrompt::with_answers([None]);
    let outcome = dialog::handle_card_action(
        &mut table.ctx(),
        message,
        CardAction::Attack,
        &PointerEvent::at(0, 0),
    )
    .unwrap();

    assert_eq!(outcome, CardOutcome::Handled(DispatchOutcome::Cancelled));
    assert_eq!(table.chat.len(), chat_before);
    assert_eq!(table.hero_items(), 0);
}

#[test]
fn check_journey_uses_injected_button_and_interactor_modifier() {
    let mut table = Table::new();
    let tome = table.tome;
    let message = table.use_item(tome);

    let card = &table.chat.message(message).unwrap().card;
    let button = card.button(CardAction::Check).expect("injected button");
    assert_eq!(button.label, "Intelligence Check");

    dialog::handle_card_action(
        &mut table.ctx(),
        message,
        CardAction::Check,
        &PointerEvent::at(0, 0),
    )
    .unwrap();

    let result = &table.chat.last().unwrap().card;
    assert!(result.description.contains("ability check (Intelligence)"));
    assert!(result.description.contains("+ 3"));
}

#[test]
fn loot_journey_runs_macro_once_and_closes_dialog() {
    let mut table = Table::new();
    let chest = table.chest_token;
    let pouch = table.pouch;

    let mut dlg = dialog::open_dialog(&table.ctx(), chest, &PointerEvent::at(0, 0)).unwrap();
    let outcome = dialog::click_entry(&mut table.ctx(), &mut dlg, pouch).unwrap();

    assert!(matches!(outcome, EntryOutcome::Used { closed: true, .. }));
    assert!(!dlg.is_open());
    assert_eq!(table.macros.execution_count("found-gold"), 1);
    assert_eq!(table.hero_items(), 0);

    // The loot card carries no buttons; a stray click falls back to default.
    let message = table.chat.last().unwrap().id;
    assert!(table.chat.message(message).unwrap().card.buttons.is_empty());
    assert!(table.chat.session_for(message).is_some());
}

#[test]
fn no_selection_aborts_cleanly() {
    let mut table = Table::new();
    table.selection = Selection::new();
    let chest = table.chest_token;
    let sword = table.sword;

    let mut dlg = dialog::open_dialog(&table.ctx(), chest, &PointerEvent::at(0, 0)).unwrap();
    let outcome = dialog::click_entry(&mut table.ctx(), &mut dlg, sword).unwrap();

    assert_eq!(outcome, EntryOutcome::NoInteractor);
    assert_eq!(table.notices.len(), 1);
    assert!(table.chat.is_empty());
    assert_eq!(table.hero_items(), 0);
    assert_eq!(
        table.scene.actor_of(table.chest_token).unwrap().items.len(),
        4
    );
}

#[test]
fn session_survives_unrelated_chatter() {
    let mut table = Table::new();
    let sword = table.sword;
    let message = table.use_item(sword);

    table.chat.push(truhe_interact::ChatCard::new(
        "Table talk",
        "Unrelated banter.",
    ));

    let session = table.chat.session_for(message).unwrap();
    assert_eq!(session.item, sword);
    assert_eq!(session.environment_token, table.chest_token);
    assert_eq!(session.interactor_token, table.hero_token);
}
