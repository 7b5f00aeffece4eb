//! The room aggregate and its intent handlers.
//!
//! A `Room` owns one game's entire state. Intents are applied one at a time
//! through `&mut self`; each handler validates first and mutates only once
//! the intent is known to be legal, so a rejected intent leaves the room
//! unchanged. Handlers never deliver anything themselves: they describe what
//! happened as an `Outcome` for the transport.

use im::Vector;

use super::code::RoomCode;
use super::phase::Phase;
use crate::core::{GameError, GameRng, Intent, IntentRecord, PlayerId, Result, RoomConfig};
use crate::deck::{Deck, Draw, Policy, PolicyTally};
use crate::election::{nominable, validate_nomination, Election, TermLimits};
use crate::events::{GameEvent, Outcome, PrivateEvent};
use crate::legislature::{check_discard, check_enact, Government, VetoStatus, DRAW_SIZE};
use crate::powers::{check_target, power_for, targets, PendingPower, Power, PowerUse, PEEK_SIZE};
use crate::roster::{infiltrator_count, Roster};
use crate::rotation::Rotation;
use crate::rules::{GameResult, WinEvaluator};

/// One game session.
#[derive(Clone, Debug)]
pub struct Room {
    code: RoomCode,
    config: RoomConfig,
    rules: WinEvaluator,
    seed: u64,
    rng: GameRng,
    phase: Phase,
    roster: Roster,
    deck: Deck,
    board: PolicyTally,
    election_tracker: u8,
    term_limits: TermLimits,
    rotation: Rotation,
    round: u32,
    history: Vector<IntentRecord>,
}

impl Room {
    /// Create an empty room in the lobby.
    pub fn new(code: RoomCode, config: RoomConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            code,
            rules: WinEvaluator::new(&config),
            config,
            seed,
            rng: GameRng::new(seed).for_context("deck"),
            phase: Phase::Lobby,
            roster: Roster::new(),
            deck: Deck::default(),
            board: PolicyTally::default(),
            election_tracker: 0,
            term_limits: TermLimits::default(),
            rotation: Rotation::default(),
            round: 0,
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    #[must_use]
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board(&self) -> PolicyTally {
        self.board
    }

    #[must_use]
    pub fn election_tracker(&self) -> u8 {
        self.election_tracker
    }

    #[must_use]
    pub fn term_limits(&self) -> TermLimits {
        self.term_limits
    }

    #[must_use]
    pub fn rotation_index(&self) -> usize {
        self.rotation.index()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Cards in the draw pile, discard pile, government hands and on the board.
    /// Constant for the whole game.
    #[must_use]
    pub fn card_total(&self) -> usize {
        self.deck.len() + self.phase.cards_in_hand() + self.board.total()
    }

    /// Reorder the draw pile. The order must contain exactly the cards
    /// already there; used to script games.
    pub fn arrange_draw_pile(&mut self, order: &[Policy]) -> Result<()> {
        if !self.phase.is_in_game() {
            return Err(GameError::WrongPhase);
        }
        if self.deck.arrange(order) {
            Ok(())
        } else {
            Err(GameError::HandMismatch)
        }
    }

    /// Put `top` on the draw pile, top first, folding the discard pile in
    /// when the draw pile alone does not hold those cards. Used to script games.
    pub fn stack_draw_pile(&mut self, top: &[Policy]) -> Result<()> {
        if !self.phase.is_in_game() {
            return Err(GameError::WrongPhase);
        }
        if self.deck.put_on_top(top, &mut self.rng) {
            Ok(())
        } else {
            Err(GameError::HandMismatch)
        }
    }

    // === Entry points ===

    /// Apply one intent from `actor`.
    pub fn handle(&mut self, actor: PlayerId, intent: Intent) -> Result<Outcome> {
        let result = match &intent {
            Intent::Join { name } => self.apply_join(actor, name),
            Intent::Start => self.apply_start(actor),
            Intent::Nominate { nominee } => self.apply_nominate(actor, *nominee),
            Intent::Vote { approve } => self.apply_vote(actor, *approve),
            Intent::DrawPolicies => self.apply_draw(actor),
            Intent::PresidentDiscard { discarded, kept } => self.apply_discard(actor, *discarded, *kept),
            Intent::RunningMateEnact { enacted, discarded } => self.apply_enact(actor, *enacted, *discarded),
            Intent::RequestVeto => self.apply_request_veto(actor),
            Intent::ConfirmVeto { approve } => self.apply_confirm_veto(actor, *approve),
            Intent::UsePower(power) => self.apply_power(actor, *power),
            Intent::Resume => self.apply_resume(actor),
            Intent::Leave => self.apply_leave(actor),
            Intent::Chat { message } => self.apply_chat(actor, message),
        };

        match &result {
            Ok(_) => {
                tracing::debug!(room = %self.code, %actor, intent = intent.name(), phase = self.phase.name(), "intent applied");
                let sequence = self.history.len() as u32;
                self.history.push_back(IntentRecord {
                    player: actor,
                    intent,
                    round: self.round,
                    sequence,
                });
            }
            Err(err) => {
                tracing::debug!(room = %self.code, %actor, intent = intent.name(), %err, "intent rejected");
            }
        }
        result
    }

    pub fn join(&mut self, actor: PlayerId, name: &str) -> Result<Outcome> {
        self.handle(actor, Intent::Join { name: name.to_string() })
    }

    pub fn start_game(&mut self, actor: PlayerId) -> Result<Outcome> {
        self.handle(actor, Intent::Start)
    }

    pub fn nominate(&mut self, actor: PlayerId, nominee: PlayerId) -> Result<Outcome> {
        self.handle(actor, Intent::Nominate { nominee })
    }

    pub fn vote(&mut self, actor: PlayerId, approve: bool) -> Result<Outcome> {
        self.handle(actor, Intent::Vote { approve })
    }

    pub fn draw_policies(&mut self, actor: PlayerId) -> Result<Outcome> {
        self.handle(actor, Intent::DrawPolicies)
    }

    pub fn president_discard(&mut self, actor: PlayerId, discarded: Policy, kept: [Policy; 2]) -> Result<Outcome> {
        self.handle(actor, Intent::PresidentDiscard { discarded, kept })
    }

    pub fn running_mate_enact(&mut self, actor: PlayerId, enacted: Policy, discarded: Policy) -> Result<Outcome> {
        self.handle(actor, Intent::RunningMateEnact { enacted, discarded })
    }

    pub fn request_veto(&mut self, actor: PlayerId) -> Result<Outcome> {
        self.handle(actor, Intent::RequestVeto)
    }

    pub fn confirm_veto(&mut self, actor: PlayerId, approve: bool) -> Result<Outcome> {
        self.handle(actor, Intent::ConfirmVeto { approve })
    }

    pub fn use_power(&mut self, actor: PlayerId, power: PowerUse) -> Result<Outcome> {
        self.handle(actor, Intent::UsePower(power))
    }

    pub fn resume(&mut self, actor: PlayerId) -> Result<Outcome> {
        self.handle(actor, Intent::Resume)
    }

    pub fn leave(&mut self, actor: PlayerId) -> Result<Outcome> {
        self.handle(actor, Intent::Leave)
    }

    pub fn chat(&mut self, actor: PlayerId, message: &str) -> Result<Outcome> {
        self.handle(actor, Intent::Chat { message: message.to_string() })
    }

    // === Lobby ===

    fn apply_join(&mut self, actor: PlayerId, name: &str) -> Result<Outcome> {
        if self.phase != Phase::Lobby {
            return Err(GameError::GameAlreadyActive);
        }
        if self.roster.len() >= self.config.max_players {
            return Err(GameError::RoomFull(self.config.max_players));
        }
        let view = self.roster.join(actor, name)?.view();

        let mut out = Outcome::new();
        out.whisper(
            actor,
            PrivateEvent::Joined {
                room: self.code.to_string(),
                is_host: view.is_host,
            },
        );
        out.broadcast(GameEvent::PlayerJoined {
            player: view,
            roster: self.roster.views(),
        });
        Ok(out)
    }

    fn apply_start(&mut self, actor: PlayerId) -> Result<Outcome> {
        if self.phase != Phase::Lobby {
            return Err(GameError::GameAlreadyActive);
        }
        if !self.roster.require(actor)?.is_host {
            return Err(GameError::NotHost);
        }
        let mut roles_rng = GameRng::new(self.seed).for_context("roles");
        // Fails before touching any player when the table is too small.
        let reveals = self.roster.assign_roles(
            &mut roles_rng,
            self.config.min_players,
            self.config.leader_knows_team_max_players,
        )?;
        self.phase = Phase::RoleAssignment;

        self.deck = Deck::new(self.config.radical_cards, self.config.traditional_cards, &mut self.rng);
        self.board = PolicyTally::default();
        self.election_tracker = 0;
        self.term_limits.clear();
        self.rotation = Rotation::default();
        self.round = 0;

        tracing::info!(room = %self.code, players = self.roster.len(), "game started");

        let mut out = Outcome::new();
        out.reveal_delay = self.config.role_reveal_delay();
        out.broadcast(GameEvent::GameStarted {
            players: self.roster.views(),
            infiltrators: infiltrator_count(self.roster.len()),
        });
        for reveal in reveals {
            out.whisper(reveal.player, PrivateEvent::RoleAssigned(reveal));
        }
        self.start_round(&mut out)?;
        Ok(out)
    }

    // === Election ===

    fn apply_nominate(&mut self, actor: PlayerId, nominee: PlayerId) -> Result<Outcome> {
        let Phase::Nomination { president } = self.phase else {
            return Err(GameError::WrongPhase);
        };
        validate_nomination(&self.roster, &self.term_limits, president, actor, nominee)?;

        self.phase = Phase::Voting {
            election: Election::new(president, nominee),
        };
        let mut out = Outcome::new();
        out.broadcast(GameEvent::Nominated { president, nominee });
        Ok(out)
    }

    fn apply_vote(&mut self, actor: PlayerId, approve: bool) -> Result<Outcome> {
        let Phase::Voting { election } = &mut self.phase else {
            return Err(GameError::VotingClosed);
        };
        election.cast(&self.roster, actor, approve)?;

        let mut out = Outcome::new();
        out.broadcast(GameEvent::VoteCast {
            voter: actor,
            remaining: election.pending(&self.roster).len(),
        });
        if election.is_complete(&self.roster) {
            let election = election.clone();
            self.resolve_election(&election, &mut out)?;
        }
        Ok(out)
    }

    /// Runs exactly once per ballot: the phase leaves `Voting` here, so any
    /// later vote for the same round is rejected with `VotingClosed`.
    fn resolve_election(&mut self, election: &Election, out: &mut Outcome) -> Result<()> {
        let tally = election.tally(&self.roster);
        let passed = tally.passed;

        if passed {
            self.election_tracker = 0;
        } else {
            self.election_tracker += 1;
        }
        tracing::debug!(room = %self.code, yes = tally.yes, no = tally.no, passed, "election resolved");
        out.broadcast(GameEvent::ElectionResolved {
            tally,
            election_tracker: self.election_tracker,
        });

        if !passed {
            return self.after_failed_government(out);
        }
        if let Some(result) = self.rules.check_election(&self.board, &self.roster, election.nominee) {
            self.finish(result, out);
            return Ok(());
        }
        self.phase = Phase::PresidentialDraw {
            government: Government {
                president: election.president,
                running_mate: election.nominee,
            },
        };
        Ok(())
    }

    /// The tracker has already been advanced. Force a policy if it hit the
    /// limit, then move on to the next round.
    fn after_failed_government(&mut self, out: &mut Outcome) -> Result<()> {
        if self.election_tracker >= self.config.election_tracker_limit {
            self.force_enact(out);
            if self.is_over() {
                return Ok(());
            }
        }
        self.start_round(out)
    }

    /// Chaos: enact the top card with no government behind it.
    fn force_enact(&mut self, out: &mut Outcome) {
        let draw = self.deck.draw(1, &mut self.rng);
        self.note_reshuffle(&draw, out);
        self.election_tracker = 0;
        self.term_limits.clear();

        debug_assert!(!draw.cards.is_empty(), "forced enactment drew nothing");
        let Some(&policy) = draw.cards.first() else {
            tracing::error!(room = %self.code, "forced enactment drew nothing");
            return;
        };
        self.board.enact(policy);
        tracing::debug!(room = %self.code, %policy, "policy forced");
        out.broadcast(GameEvent::PolicyEnacted {
            policy,
            forced: true,
            board: self.board,
        });
        if let Some(result) = self.rules.check(&self.board, &self.roster) {
            self.finish(result, out);
        }
    }

    // === Legislative session ===

    fn apply_draw(&mut self, actor: PlayerId) -> Result<Outcome> {
        let Phase::PresidentialDraw { government } = self.phase else {
            return Err(GameError::WrongPhase);
        };
        if actor != government.president {
            return Err(GameError::WrongPhase);
        }

        let mut out = Outcome::new();
        let draw = self.deck.draw(DRAW_SIZE, &mut self.rng);
        self.note_reshuffle(&draw, &mut out);
        out.broadcast(GameEvent::PoliciesDrawn {
            president: government.president,
        });
        out.whisper(
            government.president,
            PrivateEvent::PoliciesDealt {
                cards: draw.cards.clone(),
            },
        );
        self.phase = Phase::PresidentDiscard {
            government,
            hand: draw.cards,
        };
        Ok(out)
    }

    fn apply_discard(&mut self, actor: PlayerId, discarded: Policy, kept: [Policy; 2]) -> Result<Outcome> {
        let Phase::PresidentDiscard { government, hand } = &self.phase else {
            return Err(GameError::WrongPhase);
        };
        let government = *government;
        if actor != government.president {
            return Err(GameError::NotCurrentPresident);
        }
        check_discard(hand, discarded, kept)?;

        self.deck.discard(discarded);
        let veto = VetoStatus::for_board(&self.config, self.board.radical);
        self.phase = Phase::RunningMateEnact {
            government,
            hand: kept,
            veto,
        };

        let mut out = Outcome::new();
        out.broadcast(GameEvent::PresidentDiscarded {
            president: government.president,
            running_mate: government.running_mate,
        });
        out.whisper(government.running_mate, PrivateEvent::PoliciesForwarded { cards: kept, veto });
        Ok(out)
    }

    fn apply_enact(&mut self, actor: PlayerId, enacted: Policy, discarded: Policy) -> Result<Outcome> {
        let Phase::RunningMateEnact { government, hand, veto } = self.phase else {
            return Err(GameError::WrongPhase);
        };
        if actor != government.running_mate || veto == VetoStatus::Requested {
            return Err(GameError::WrongPhase);
        }
        check_enact(hand, enacted, discarded)?;

        self.deck.discard(discarded);
        let mut out = Outcome::new();
        self.enact_elected(government, enacted, &mut out)?;
        Ok(out)
    }

    fn enact_elected(&mut self, government: Government, policy: Policy, out: &mut Outcome) -> Result<()> {
        let count = self.board.enact(policy);
        self.term_limits.record(government.president, government.running_mate);
        tracing::debug!(room = %self.code, %policy, count, "policy enacted");
        out.broadcast(GameEvent::PolicyEnacted {
            policy,
            forced: false,
            board: self.board,
        });

        if let Some(result) = self.rules.check(&self.board, &self.roster) {
            self.finish(result, out);
            return Ok(());
        }
        if policy == Policy::Radical {
            if let Some(power) = power_for(self.board.radical, self.roster.living_count()) {
                self.phase = Phase::PowerInProgress {
                    president: government.president,
                    pending: PendingPower::new(power),
                };
                out.broadcast(GameEvent::PowerGranted {
                    president: government.president,
                    power,
                });
                return Ok(());
            }
        }
        self.start_round(out)
    }

    fn apply_request_veto(&mut self, actor: PlayerId) -> Result<Outcome> {
        let Phase::RunningMateEnact { government, veto, .. } = &mut self.phase else {
            return Err(GameError::WrongPhase);
        };
        if actor != government.running_mate {
            return Err(GameError::WrongPhase);
        }
        if *veto != VetoStatus::Available {
            return Err(GameError::VetoUnavailable);
        }
        *veto = VetoStatus::Requested;

        let mut out = Outcome::new();
        out.broadcast(GameEvent::VetoRequested { running_mate: actor });
        Ok(out)
    }

    fn apply_confirm_veto(&mut self, actor: PlayerId, approve: bool) -> Result<Outcome> {
        let Phase::RunningMateEnact { government, hand, veto } = &mut self.phase else {
            return Err(GameError::WrongPhase);
        };
        if *veto != VetoStatus::Requested {
            return Err(GameError::WrongPhase);
        }
        if actor != government.president {
            return Err(GameError::NotCurrentPresident);
        }

        let mut out = Outcome::new();
        if !approve {
            *veto = VetoStatus::Denied;
            out.broadcast(GameEvent::VetoResolved {
                approved: false,
                election_tracker: self.election_tracker,
            });
            return Ok(out);
        }

        let hand = *hand;
        let president = government.president;
        // The session ends with no cards in hand; the sitting president holds
        // the table until the next round opens.
        self.phase = Phase::Nomination { president };
        for card in hand {
            self.deck.discard(card);
        }
        self.election_tracker += 1;
        out.broadcast(GameEvent::VetoResolved {
            approved: true,
            election_tracker: self.election_tracker,
        });
        self.after_failed_government(&mut out)?;
        Ok(out)
    }

    // === Powers ===

    fn apply_power(&mut self, actor: PlayerId, power: PowerUse) -> Result<Outcome> {
        let Phase::PowerInProgress { president, pending } = self.phase else {
            return Err(GameError::WrongPhase);
        };
        if actor != president {
            return Err(GameError::NotCurrentPresident);
        }
        if pending.used || pending.power != power.power() {
            return Err(GameError::WrongPhase);
        }
        if let Some(target) = power.target() {
            check_target(&self.roster, president, target)?;
        }

        let mut out = Outcome::new();
        match power {
            PowerUse::Investigate { target } => {
                let alignment = self.roster.require(target)?.alignment();
                out.whisper(president, PrivateEvent::InvestigationResult { target, alignment });
                out.broadcast(GameEvent::PlayerInvestigated { president, target });
                self.start_round(&mut out)?;
            }
            PowerUse::Peek => {
                let draw = self.deck.peek(PEEK_SIZE, &mut self.rng);
                self.note_reshuffle(&draw, &mut out);
                out.whisper(president, PrivateEvent::PeekResult { cards: draw.cards });
                out.broadcast(GameEvent::DrawPilePeeked { president });
                self.mark_power_used();
            }
            PowerUse::Expel { target } => {
                if let Some(player) = self.roster.get_mut(target) {
                    player.expelled = true;
                }
                tracing::debug!(room = %self.code, %target, "player expelled");
                out.broadcast(GameEvent::PlayerExpelled { player: target });
                match self.rules.check(&self.board, &self.roster) {
                    Some(result) => self.finish(result, &mut out),
                    None => self.mark_power_used(),
                }
            }
        }
        Ok(out)
    }

    fn mark_power_used(&mut self) {
        if let Phase::PowerInProgress { pending, .. } = &mut self.phase {
            pending.used = true;
        }
    }

    fn apply_resume(&mut self, actor: PlayerId) -> Result<Outcome> {
        let Phase::PowerInProgress { president, pending } = self.phase else {
            return Err(GameError::WrongPhase);
        };
        if actor != president {
            return Err(GameError::NotCurrentPresident);
        }
        if !pending.used || !pending.power.needs_resume() {
            return Err(GameError::WrongPhase);
        }
        let mut out = Outcome::new();
        self.start_round(&mut out)?;
        Ok(out)
    }

    // === Membership and chat ===

    fn apply_leave(&mut self, actor: PlayerId) -> Result<Outcome> {
        self.roster.require(actor)?;
        let in_game = self.phase.is_in_game();

        let mut out = Outcome::new();
        if let Some(departure) = self.roster.remove(actor) {
            out.broadcast(GameEvent::PlayerLeft {
                player: actor,
                new_host: departure.new_host,
                roster: self.roster.views(),
            });
        }
        if in_game {
            tracing::info!(room = %self.code, %actor, "player left mid-game");
            self.finish(GameResult::Abandoned { player: actor }, &mut out);
        } else if self.roster.is_empty() {
            out.closed = true;
        }
        Ok(out)
    }

    fn apply_chat(&mut self, actor: PlayerId, message: &str) -> Result<Outcome> {
        let player = self.roster.require(actor)?;
        let message = message.trim();
        let mut out = Outcome::new();
        if player.expelled || message.is_empty() {
            return Ok(out);
        }
        out.broadcast(GameEvent::Chat {
            from: actor,
            name: player.name.clone(),
            message: message.to_string(),
        });
        Ok(out)
    }

    // === Shared transitions ===

    fn start_round(&mut self, out: &mut Outcome) -> Result<()> {
        let president = self.rotation.advance(&self.roster)?;
        self.round += 1;
        self.phase = Phase::Nomination { president };
        out.broadcast(GameEvent::NewRound {
            round: self.round,
            president,
            nominable: nominable(&self.roster, &self.term_limits, president),
            election_tracker: self.election_tracker,
        });
        Ok(())
    }

    fn finish(&mut self, result: GameResult, out: &mut Outcome) {
        tracing::info!(room = %self.code, ?result, round = self.round, "game over");
        self.phase = Phase::GameOver { result };
        out.broadcast(GameEvent::GameOver {
            result,
            board: self.board,
            roles: self.roster.roles(),
        });
        out.closed = true;
    }

    fn note_reshuffle(&self, draw: &Draw, out: &mut Outcome) {
        if draw.reshuffled {
            out.broadcast(GameEvent::DeckReshuffled {
                draw_pile: self.deck.draw_len(),
            });
        }
    }

    // === Legal intents ===

    /// Every game intent `player` could submit right now.
    ///
    /// Membership and chat intents are not listed.
    #[must_use]
    pub fn legal_intents(&self, player: PlayerId) -> Vec<Intent> {
        let mut intents = Vec::new();
        match &self.phase {
            Phase::Lobby => {
                let is_host = self.roster.get(player).is_some_and(|p| p.is_host);
                if is_host && self.roster.len() >= self.config.min_players {
                    intents.push(Intent::Start);
                }
            }
            Phase::Nomination { president } if *president == player => {
                intents.extend(
                    nominable(&self.roster, &self.term_limits, player)
                        .into_iter()
                        .map(|nominee| Intent::Nominate { nominee }),
                );
            }
            Phase::Voting { election } => {
                if election.check_vote(&self.roster, player).is_ok() {
                    intents.push(Intent::Vote { approve: true });
                    intents.push(Intent::Vote { approve: false });
                }
            }
            Phase::PresidentialDraw { government } if government.president == player => {
                intents.push(Intent::DrawPolicies);
            }
            Phase::PresidentDiscard { government, hand } if government.president == player => {
                for i in 0..hand.len() {
                    let kept: Vec<Policy> = hand
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, &p)| p)
                        .collect();
                    let intent = Intent::PresidentDiscard {
                        discarded: hand[i],
                        kept: [kept[0], kept[1]],
                    };
                    if !intents.contains(&intent) {
                        intents.push(intent);
                    }
                }
            }
            Phase::RunningMateEnact { government, hand, veto } => {
                if government.running_mate == player && *veto != VetoStatus::Requested {
                    for (enacted, discarded) in [(hand[0], hand[1]), (hand[1], hand[0])] {
                        let intent = Intent::RunningMateEnact { enacted, discarded };
                        if !intents.contains(&intent) {
                            intents.push(intent);
                        }
                    }
                    if *veto == VetoStatus::Available {
                        intents.push(Intent::RequestVeto);
                    }
                }
                if government.president == player && *veto == VetoStatus::Requested {
                    intents.push(Intent::ConfirmVeto { approve: true });
                    intents.push(Intent::ConfirmVeto { approve: false });
                }
            }
            Phase::PowerInProgress { president, pending } if *president == player => {
                if pending.used {
                    intents.push(Intent::Resume);
                } else {
                    match pending.power {
                        Power::Peek => intents.push(Intent::UsePower(PowerUse::Peek)),
                        Power::Investigate => intents.extend(
                            targets(&self.roster, player)
                                .into_iter()
                                .map(|target| Intent::UsePower(PowerUse::Investigate { target })),
                        ),
                        Power::Expel => intents.extend(
                            targets(&self.roster, player)
                                .into_iter()
                                .map(|target| Intent::UsePower(PowerUse::Expel { target })),
                        ),
                    }
                }
            }
            _ => {}
        }
        intents
    }

    /// Expel every seat while `president` waits to resume after a peek, so
    /// the next round has nobody to seat.
    #[cfg(test)]
    pub(crate) fn strand_after_peek(&mut self, president: PlayerId) {
        let ids: Vec<PlayerId> = self.roster.iter().map(|pl| pl.id).collect();
        for id in ids {
            if let Some(player) = self.roster.get_mut(id) {
                player.expelled = true;
            }
        }
        self.phase = Phase::PowerInProgress {
            president,
            pending: PendingPower {
                power: Power::Peek,
                used: true,
            },
        };
    }
}
