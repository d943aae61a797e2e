//! The game session: one run from the crash to an ending.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vg_core::{CoreError, Direction, GameState, ItemEffect, JournalEntry};
use vg_mechanics::{Combat, Oracle, Phase};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrative::{Decision, acts, resolve, script, triggers};
use crate::parser::{Command, Verb, combat_verbs, did_you_mean, help_line, parse_command};
use crate::reply::{Ending, Reply};

/// Whether the run is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting commands.
    Running,
    /// Stopped for good.
    Ended(Ending),
}

/// A single run of the game.
///
/// Every call to [`GameSession::process`] is one complete turn: the command
/// or pending decision, then the per-turn triggers, then the next prompt.
pub struct GameSession {
    state: GameState,
    combat: Combat,
    oracle: Box<dyn Oracle>,
    rng: StdRng,
    pending: VecDeque<Decision>,
    status: SessionState,
    config: GameConfig,
}

impl GameSession {
    /// Build the first act and place the captain at the crash site.
    pub fn new(config: GameConfig, oracle: Box<dyn Oracle>) -> FictionResult<Self> {
        let (map, entry) = acts::eridani()?;
        let state = GameState::new(config.captain_name.clone(), config.max_weight, map, entry);
        Ok(Self {
            state,
            combat: Combat::new(),
            oracle,
            rng: StdRng::seed_from_u64(config.seed),
            pending: VecDeque::new(),
            status: SessionState::Running,
            config,
        })
    }

    /// The opening text and the first decision.
    pub fn start(&mut self) -> Reply {
        let mut reply = Reply::say(format!(
            "Captain {}, your ship tore through the atmosphere of Eridani Prime and hit the \
             ground hard.",
            self.state.player.name
        ));
        match self.state.describe_here() {
            Ok(text) => reply.push(text),
            Err(e) => reply.push(e.to_string()),
        }
        self.state.note("Crash-landed on Eridani Prime.");
        reply.raise(Decision::CrashLanding);
        self.settle(reply, false)
    }

    /// Run one turn for a line of input.
    pub fn process(&mut self, input: &str) -> Reply {
        if let SessionState::Ended(ending) = self.status {
            return Reply::say(format!("The story is over ({ending})."));
        }

        if let Some(&decision) = self.pending.front() {
            let Some(choice) = Decision::parse_choice(input) else {
                tracing::warn!(input, ?decision, "invalid choice, prompting again");
                let mut reply = Reply::say("Choose 1 or 2.");
                reply.push(decision.prompt());
                return reply;
            };
            self.pending.pop_front();
            let roll = self.rng.random::<f64>();
            let reply = resolve(decision, choice, &mut self.state, roll);
            return self.settle(reply, false);
        }

        let before = (self.state.player.location, self.state.story.act());
        let reply = match parse_command(input) {
            Ok(None) => return Reply::new(),
            Ok(Some(command)) => {
                tracing::debug!(verb = ?command.verb, arg = ?command.arg, "command");
                self.execute(&command)
                    .unwrap_or_else(|e| Reply::say(e.to_string()))
            }
            Err(e) => Reply::say(e.to_string()),
        };
        let arrived = before != (self.state.player.location, self.state.story.act());
        self.settle(reply, arrived)
    }

    /// The game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The game state, mutably.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Running or ended.
    pub fn status(&self) -> SessionState {
        self.status
    }

    /// Whether commands are still accepted.
    pub fn is_running(&self) -> bool {
        self.status == SessionState::Running
    }

    /// The decision waiting for an answer, if any.
    pub fn pending(&self) -> Option<Decision> {
        self.pending.front().copied()
    }

    /// The combat state machine.
    pub fn combat(&self) -> &Combat {
        &self.combat
    }

    /// The configuration this run was started with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Queue raised decisions, detect endings, run triggers and prompt.
    fn settle(&mut self, mut reply: Reply, arrived: bool) -> Reply {
        self.enqueue(&reply.raised);
        if self.check_ending(&mut reply) {
            return reply;
        }

        if self.pending.is_empty() {
            match triggers::run(
                &mut self.state,
                &mut self.combat,
                self.oracle.as_mut(),
                arrived,
            ) {
                Ok(more) => {
                    self.enqueue(&more.raised);
                    reply.absorb(more);
                }
                Err(e) => reply.push(e.to_string()),
            }
            if self.check_ending(&mut reply) {
                return reply;
            }
        }

        if let Some(decision) = self.pending.front() {
            reply.push(decision.prompt());
        }
        reply
    }

    fn enqueue(&mut self, raised: &[Decision]) {
        for &decision in raised {
            if !self.pending.contains(&decision) && !decision.is_settled(&self.state.story) {
                tracing::debug!(?decision, "decision raised");
                self.pending.push_back(decision);
            }
        }
    }

    fn check_ending(&mut self, reply: &mut Reply) -> bool {
        if reply.ending.is_none()
            && (self.combat.is_player_defeated() || !self.state.player.stats.is_alive())
        {
            if !self.combat.is_player_defeated() {
                reply.push("Your wounds are too deep. GAME OVER.");
            }
            reply.end(Ending::Defeat);
        }
        let Some(ending) = reply.ending else {
            return false;
        };
        tracing::info!(%ending, "story ended");
        self.state.note(format!("The story ended: {ending}."));
        self.pending.clear();
        self.status = SessionState::Ended(ending);
        true
    }

    fn execute(&mut self, command: &Command) -> FictionResult<Reply> {
        if self.combat.is_engaged() && !command.verb.allowed_in_combat() {
            return Err(FictionError::CombatLocked {
                allowed: combat_verbs(),
            });
        }

        let arg = command.arg.as_deref();
        match command.verb {
            Verb::Go => self.do_go(command.require_arg("Go where?")?),
            Verb::Back => self.do_back(),
            Verb::Look => Ok(Reply::say(self.state.describe_here()?)),
            Verb::Take => self.do_take(command.require_arg("Take what?")?),
            Verb::Drop => self.do_drop(command.require_arg("Drop what?")?),
            Verb::Inventory => Ok(Reply::say(self.state.player.inventory.render())),
            Verb::Check => self.do_check(command.require_arg("Check what?")?),
            Verb::Talk => self.do_talk(command.require_arg("Talk to whom?")?),
            Verb::Attack => {
                let strike = self
                    .combat
                    .attack(&mut self.state, self.oracle.as_mut(), arg)?;
                Ok(lines(strike.lines))
            }
            Verb::Cheat => {
                let strike = self.combat.instant_kill(&mut self.state, arg)?;
                Ok(lines(strike.lines))
            }
            Verb::Use => self.do_use(command.require_arg("Use what?")?),
            Verb::Status => Ok(self.do_status()),
            Verb::History => Ok(Reply::say(self.state.journal.history())),
            Verb::Ai => Ok(Reply::say(self.oracle.tally().summary())),
            Verb::Analyze => self.do_analyze(command.require_arg("Analyze what?")?),
            Verb::Journal => self.do_journal(arg),
            Verb::Help => Ok(Reply::say(help_line())),
            Verb::Quit => {
                let mut reply = Reply::say("You log off. The stars will wait.");
                reply.end(Ending::Abandoned);
                Ok(reply)
            }
        }
    }

    fn do_go(&mut self, target: &str) -> FictionResult<Reply> {
        let direction = Direction::parse(target)
            .ok_or_else(|| FictionError::UnknownDirection(target.to_string()))?;
        let to = self
            .state
            .current_room()?
            .exits
            .get(&direction)
            .copied()
            .ok_or(FictionError::NoExit(direction.name()))?;
        if let Some(reason) = triggers::barred(&self.state, to)? {
            return Ok(Reply::say(reason));
        }
        self.state.walk_to(to)?;
        Ok(Reply::say(self.state.describe_here()?))
    }

    fn do_back(&mut self) -> FictionResult<Reply> {
        let from = self.state.current_room()?.name.clone();
        self.state.player.back().ok_or(FictionError::NoHistory)?;
        let to = self.state.current_room()?.name.clone();
        self.state.journal.append(JournalEntry::travel(from, to));
        Ok(Reply::say(self.state.describe_here()?))
    }

    fn do_take(&mut self, name: &str) -> FictionResult<Reply> {
        let here = self.state.player.location;
        let room = self.state.map.room(here)?;
        match room.items.iter().find(|i| i.is_named(name)) {
            Some(item) => self.state.player.inventory.check_capacity(item)?,
            None => {
                return Err(not_here(name, room.items.iter().map(|i| i.name.as_str())));
            }
        }
        let item = self
            .state
            .map
            .room_mut(here)?
            .take_item(name)
            .ok_or_else(|| not_here(name, std::iter::empty()))?;
        let line = format!("You take the {}.", item.name);
        self.state.player.inventory.add(item);
        Ok(Reply::say(line))
    }

    fn do_drop(&mut self, name: &str) -> FictionResult<Reply> {
        let item = self.state.player.inventory.remove(name)?;
        let line = format!("You drop the {}.", item.name);
        self.state.current_room_mut()?.items.push(item);
        Ok(Reply::say(line))
    }

    fn do_check(&self, name: &str) -> FictionResult<Reply> {
        let room = self.state.current_room()?;
        let item = self
            .state
            .player
            .inventory
            .get(name)
            .or_else(|| room.items.iter().find(|i| i.is_named(name)))
            .ok_or_else(|| not_here(name, room.items.iter().map(|i| i.name.as_str())))?;
        let mut reply = Reply::say(item.to_string());
        reply.push(item.description.clone());
        Ok(reply)
    }

    fn do_talk(&mut self, name: &str) -> FictionResult<Reply> {
        let room = self.state.current_room_mut()?;
        let Some(character) = room.character_mut(name) else {
            let names = room.characters.iter().map(|c| c.name.as_str());
            return Err(not_here(name, names));
        };
        match character.talk() {
            vg_core::Utterance::Line(line) => Ok(Reply::say(line)),
            vg_core::Utterance::Script(id) => Ok(script::run(id, &mut self.state)),
        }
    }

    fn do_use(&mut self, name: &str) -> FictionResult<Reply> {
        let inventory = &mut self.state.player.inventory;
        let item = inventory
            .get(name)
            .ok_or_else(|| CoreError::NotCarried(name.trim().to_string()))?;
        if item.usable && matches!(item.effect, ItemEffect::Quest) {
            return Ok(Reply::say(format!(
                "The {} is important, but has no effect.",
                item.name
            )));
        }
        if !item.is_consumable() {
            return Err(FictionError::CannotUse(item.name.clone()));
        }

        let item = inventory.remove(name)?;
        let stats = &mut self.state.player.stats;
        let line = match item.effect {
            ItemEffect::Heal => {
                let healed = stats.heal(item.magnitude);
                format!(
                    "You use the {} and recover {healed} HP ({}/{}).",
                    item.name, stats.hp, stats.max_hp
                )
            }
            ItemEffect::DefenseBuff => {
                stats.defense = stats.defense.saturating_add(item.magnitude);
                format!(
                    "You use the {}. Defense +{} ({}).",
                    item.name, item.magnitude, stats.defense
                )
            }
            ItemEffect::AttackBuff => {
                stats.attack = stats.attack.saturating_add(item.magnitude);
                format!(
                    "You use the {}. Attack +{} ({}).",
                    item.name, item.magnitude, stats.attack
                )
            }
            ItemEffect::Quest | ItemEffect::Inert => {
                return Err(FictionError::CannotUse(item.name));
            }
        };
        Ok(Reply::say(line))
    }

    fn do_status(&self) -> Reply {
        let story = &self.state.story;
        let mut reply = Reply::say(self.state.player.status_line());
        reply.push(format!("Act: {}", story.act()));
        let facts: Vec<&str> = story.facts().iter().map(|f| f.name()).collect();
        if !facts.is_empty() {
            reply.push(format!("Story: {}", facts.join(", ")));
        }
        if let Phase::Engaged { enemy } = self.combat.phase() {
            reply.push(format!(
                "In combat with {enemy} (round {}).",
                self.combat.round()
            ));
        }
        reply
    }

    fn do_analyze(&self, name: &str) -> FictionResult<Reply> {
        let room = self.state.current_room()?;
        if let Some(index) = room.enemy_index(name) {
            let enemy = &room.enemies[index];
            let mut reply = Reply::say(format!(
                "{} | ATK {} | DEF {}{}",
                enemy.summary(),
                enemy.attack,
                enemy.defense,
                if enemy.is_boss() { " | BOSS" } else { "" }
            ));
            if !enemy.description.is_empty() {
                reply.push(enemy.description.clone());
            }
            return Ok(reply);
        }
        if let Some(character) = room.characters.iter().find(|c| c.is_named(name)) {
            return Ok(Reply::say(format!(
                "{}: {}",
                character.name, character.description
            )));
        }
        Err(not_here(name, room.nameables()))
    }

    fn do_journal(&self, format: Option<&str>) -> FictionResult<Reply> {
        let journal = &self.state.journal;
        let text = match format.map(str::to_lowercase).as_deref() {
            None | Some("md") | Some("markdown") => journal.export_markdown(),
            Some("text") | Some("txt") => journal.export_text(),
            Some("json") => journal.export_json()?,
            Some(other) => return Err(FictionError::UnknownFormat(other.to_string())),
        };
        Ok(Reply::say(text))
    }
}

fn lines(lines: Vec<String>) -> Reply {
    let mut reply = Reply::new();
    reply.extend(lines);
    reply
}

fn not_here<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> FictionError {
    FictionError::NotHere {
        name: name.trim().to_string(),
        hint: did_you_mean(name, candidates),
    }
}
