//! The master engine: validated transitions on a `MatchState`.
//!
//! Every operation checks all of its preconditions before touching the
//! state, so an `Err` leaves the state exactly as it was.
//!
//! ## Turn operations
//!
//! - `discard`: the turn seat discards, optionally declaring riichi
//! - `declare_open_quad`: upgrade an own pon with the fourth tile
//! - `declare_concealed_quad`: set aside four concealed copies
//! - `declare_self_draw_win`: win on the drawn tile
//!
//! ## Reaction resolution
//!
//! `resolve_reactions` closes the window a discard opened. Priority is
//! fixed: ron (every claimant paid by the discarder) > kan > pon > chi >
//! nobody, in which case the next seat draws or the round ends as an
//! exhaustive draw.
//!
//! ```
//! use mahjong_master::core::{GameRng, House, RuleConfig};
//! use mahjong_master::engine::{DiscardOutcome, MasterEngine, ReactionAnswers, ReactionOutcome};
//!
//! let engine = MasterEngine::new(RuleConfig::default());
//! let mut state = engine.new_match(&mut GameRng::new(42));
//!
//! let tile = state.drawn().unwrap();
//! match engine.discard(&mut state, House::East, tile, false).unwrap() {
//!     DiscardOutcome::AwaitingReactions(_) => {
//!         let outcome = engine.resolve_reactions(&mut state, &ReactionAnswers::pass()).unwrap();
//!         assert!(matches!(outcome, ReactionOutcome::TurnAdvanced { next: House::South, .. }));
//!     }
//!     DiscardOutcome::TurnAdvanced { next, .. } => assert_eq!(next, House::South),
//!     DiscardOutcome::ExhaustiveDraw => unreachable!(),
//! }
//! assert_eq!(state.turn(), Some(House::South));
//! ```

use log::{debug, info};
use smallvec::SmallVec;

use crate::core::{ChiSlot, GameRng, House, Huro, RuleConfig, Tile};
use crate::error::{EngineError, EngineResult};
use crate::hand::{can_form_sequence_with, count_matching, is_complete, is_ready};
use crate::scoring::{evaluate, ron_deltas, tsumo_deltas, WinContext, WinTile};

use super::outcome::{DiscardOutcome, QuadOutcome, ReactionOutcome, RoundEnd, WinOutcome};
use super::reaction::{CallKind, Eligibility, ReactionAnswers, ReactionWindow};
use super::state::{take_tile, take_tiles, MatchState, Phase};

/// Applies player intents to a match under one rule configuration.
#[derive(Clone, Debug, Default)]
pub struct MasterEngine {
    config: RuleConfig,
}

/// What the winning branch of `resolve_reactions` will do.
enum Claim {
    Ron(SmallVec<[WinOutcome; 3]>),
    Kan(House),
    Pon(House),
    Chi(House, ChiSlot),
    Pass,
}

impl MasterEngine {
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Deal the first kyoku of a new match.
    #[must_use]
    pub fn new_match(&self, rng: &mut GameRng) -> MatchState {
        MatchState::new(rng, &self.config)
    }

    // === Turn operations ===

    /// Discard `tile` from `seat`'s hand, optionally declaring riichi.
    ///
    /// ## Errors
    ///
    /// - `RoundEnded` / `NotYourTurn`: `seat` does not hold the turn
    /// - `TileNotInHand`
    /// - `AlreadyRiichi`: declaring twice
    /// - `RiichiLocked`: a riichi seat may only discard its drawn tile
    /// - `NotReady`: declaring on a hand that would not be one tile from complete
    /// - `InsufficientPoints`: declaring below the riichi cost
    pub fn discard(
        &self,
        state: &mut MatchState,
        seat: House,
        tile: Tile,
        riichi: bool,
    ) -> EngineResult<DiscardOutcome> {
        self.ensure_turn(state, seat)?;
        if !state.hands[seat].contains(&tile) {
            return Err(EngineError::TileNotInHand { seat, tile });
        }
        if state.riichi[seat] {
            if riichi {
                return Err(EngineError::AlreadyRiichi { seat });
            }
            if state.drawn != Some(tile) {
                return Err(EngineError::RiichiLocked { seat, tile });
            }
        }
        if riichi {
            let mut rest = state.hands[seat].clone();
            take_tile(&mut rest, tile);
            if !is_ready(&rest) {
                return Err(EngineError::NotReady { seat });
            }
            let points = state.points[seat];
            if points < self.config.riichi_cost {
                return Err(EngineError::InsufficientPoints {
                    seat,
                    points,
                    required: self.config.riichi_cost,
                });
            }
        }

        take_tile(&mut state.hands[seat], tile);
        state.discards[seat].push_back(tile);
        if riichi {
            state.riichi[seat] = true;
        }
        state.drawn = None;
        state.last_discard = Some((seat, tile));
        debug!("{} discards {}{}", seat, tile, if riichi { " (riichi)" } else { "" });

        let eligibility = self.eligibility(state, seat, tile);
        if eligibility.is_empty() {
            return Ok(match self.advance_turn(state, seat.next()) {
                Some(drawn) => DiscardOutcome::TurnAdvanced {
                    next: seat.next(),
                    drawn,
                },
                None => DiscardOutcome::ExhaustiveDraw,
            });
        }

        debug!("reaction window on {}: {:?}", tile, eligibility);
        state.phase = Phase::AwaitingReactions(ReactionWindow {
            discarder: seat,
            tile,
            next_turn: seat.next(),
            eligibility: eligibility.clone(),
        });
        Ok(DiscardOutcome::AwaitingReactions(eligibility))
    }

    /// Upgrade `seat`'s pon of `tile` to an open quad with the fourth copy.
    pub fn declare_open_quad(
        &self,
        state: &mut MatchState,
        seat: House,
        tile: Tile,
    ) -> EngineResult<QuadOutcome> {
        self.ensure_turn(state, seat)?;
        if !state.hands[seat].contains(&tile) {
            return Err(EngineError::TileNotInHand { seat, tile });
        }
        let pon = state.melds[seat]
            .iter()
            .position(|m| matches!(m, Huro::Pon { tile: t, .. } if *t == tile))
            .ok_or(EngineError::InvalidCallClaim {
                reason: "no pon of that tile to upgrade",
            })?;
        if state.riichi[seat] && state.drawn != Some(tile) {
            return Err(EngineError::RiichiLocked { seat, tile });
        }
        if !state.wall.can_draw_replacement() {
            return Err(EngineError::NoTilesRemaining);
        }

        let from = state.melds[seat][pon].origin().unwrap_or(seat);
        let meld = Huro::Minkan { tile, from };
        take_tile(&mut state.hands[seat], tile);
        state.melds[seat][pon] = meld;
        let replacement = self.draw_replacement(state, seat)?;
        debug!("{} upgrades pon of {} to a quad", seat, tile);
        Ok(QuadOutcome { meld, replacement })
    }

    /// Set aside four concealed copies of `tile` as a concealed quad.
    pub fn declare_concealed_quad(
        &self,
        state: &mut MatchState,
        seat: House,
        tile: Tile,
    ) -> EngineResult<QuadOutcome> {
        self.ensure_turn(state, seat)?;
        match count_matching(tile, &state.hands[seat]) {
            0 => return Err(EngineError::TileNotInHand { seat, tile }),
            4 => {}
            _ => {
                return Err(EngineError::InvalidCallClaim {
                    reason: "a concealed quad needs four copies in hand",
                })
            }
        }
        if state.riichi[seat] && state.drawn != Some(tile) {
            return Err(EngineError::RiichiLocked { seat, tile });
        }
        if !state.wall.can_draw_replacement() {
            return Err(EngineError::NoTilesRemaining);
        }

        let meld = Huro::Ankan { tile };
        take_tiles(&mut state.hands[seat], tile, 4);
        state.melds[seat].push(meld);
        let replacement = self.draw_replacement(state, seat)?;
        debug!("{} declares a concealed quad of {}", seat, tile);
        Ok(QuadOutcome { meld, replacement })
    }

    /// Win on the tile drawn this turn.
    pub fn declare_self_draw_win(
        &self,
        state: &mut MatchState,
        seat: House,
    ) -> EngineResult<WinOutcome> {
        self.ensure_turn(state, seat)?;
        let drawn = state.drawn.ok_or(EngineError::HandNotComplete { seat })?;
        let mut hand = state.hands[seat].clone();
        take_tile(&mut hand, drawn);

        let ctx = WinContext {
            seat,
            round_wind: state.round_wind,
            hand: &hand,
            melds: &state.melds[seat],
            win: WinTile::Tsumo(drawn),
            riichi: state.riichi[seat],
        };
        let evaluation =
            evaluate(&ctx, &state.wall.doras()).ok_or(EngineError::HandNotComplete { seat })?;
        let deltas = tsumo_deltas(seat, evaluation.fan);
        let outcome = WinOutcome {
            winner: seat,
            win: WinTile::Tsumo(drawn),
            evaluation,
            deltas,
        };

        apply_deltas(state, &outcome);
        info!("{} wins by tsumo on {} for {} fan", seat, drawn, outcome.evaluation.fan);
        state.phase = Phase::Ended(RoundEnd::Tsumo(outcome.clone()));
        Ok(outcome)
    }

    // === Reaction resolution ===

    /// Close the open reaction window with every seat's combined answer.
    ///
    /// ## Errors
    ///
    /// - `NoPendingReaction`: no window is open
    /// - `InvalidCallClaim`: an answer names a seat or call that is not
    ///   eligible, or a chi slot the caller's hand cannot fill
    pub fn resolve_reactions(
        &self,
        state: &mut MatchState,
        answers: &ReactionAnswers,
    ) -> EngineResult<ReactionOutcome> {
        let window = state
            .pending_reaction()
            .cloned()
            .ok_or(EngineError::NoPendingReaction)?;
        let claim = self.validate_answers(state, &window, answers)?;

        let tile = window.tile;
        let discarder = window.discarder;
        match claim {
            Claim::Ron(wins) => {
                for win in &wins {
                    apply_deltas(state, win);
                    info!("{} wins by ron on {} from {}", win.winner, tile, discarder);
                }
                state.phase = Phase::Ended(RoundEnd::Ron {
                    discarder,
                    wins: wins.clone(),
                });
                Ok(ReactionOutcome::Ron(wins))
            }
            Claim::Kan(caller) => {
                self.claim_discard(state, discarder, caller);
                take_tiles(&mut state.hands[caller], tile, 3);
                let meld = Huro::Minkan { tile, from: discarder };
                state.melds[caller].push(meld);
                let replacement = self.draw_replacement(state, caller)?;
                debug!("{} calls kan on {}", caller, tile);
                Ok(ReactionOutcome::Called {
                    kind: CallKind::Kan,
                    caller,
                    meld,
                    replacement: Some(replacement),
                })
            }
            Claim::Pon(caller) => {
                self.claim_discard(state, discarder, caller);
                take_tiles(&mut state.hands[caller], tile, 2);
                let meld = Huro::Pon { tile, from: discarder };
                state.melds[caller].push(meld);
                debug!("{} calls pon on {}", caller, tile);
                Ok(ReactionOutcome::Called {
                    kind: CallKind::Pon,
                    caller,
                    meld,
                    replacement: None,
                })
            }
            Claim::Chi(caller, slot) => {
                let (partners, run) = slot
                    .partners(tile)
                    .zip(slot.run(tile))
                    .ok_or(EngineError::InvalidCallClaim {
                        reason: "chi slot does not fit the discard",
                    })?;
                self.claim_discard(state, discarder, caller);
                for partner in partners {
                    take_tile(&mut state.hands[caller], partner);
                }
                let meld = Huro::Chi {
                    tiles: run,
                    from: discarder,
                };
                state.melds[caller].push(meld);
                debug!("{} calls chi on {}", caller, tile);
                Ok(ReactionOutcome::Called {
                    kind: CallKind::Chi,
                    caller,
                    meld,
                    replacement: None,
                })
            }
            Claim::Pass => Ok(match self.advance_turn(state, window.next_turn) {
                Some(drawn) => ReactionOutcome::TurnAdvanced {
                    next: window.next_turn,
                    drawn,
                },
                None => ReactionOutcome::ExhaustiveDraw,
            }),
        }
    }

    // === Helpers ===

    fn ensure_turn(&self, state: &MatchState, seat: House) -> EngineResult<()> {
        match state.phase {
            Phase::Turn(turn) if turn == seat => Ok(()),
            Phase::Ended(_) => Err(EngineError::RoundEnded),
            _ => Err(EngineError::NotYourTurn { seat }),
        }
    }

    /// Who may react to `discarder` discarding `tile`.
    fn eligibility(&self, state: &MatchState, discarder: House, tile: Tile) -> Eligibility {
        let mut eligibility = Eligibility::default();
        for other in discarder.others() {
            let hand = &state.hands[other];
            let furiten = state.discards[other].contains(&tile);
            if !furiten {
                let mut with_tile = hand.clone();
                with_tile.push(tile);
                if is_complete(&with_tile) {
                    eligibility.ron.push(other);
                }
            }

            // A riichi hand is locked: it may only win.
            if state.riichi[other] {
                continue;
            }
            match count_matching(tile, hand) {
                3 if state.wall.can_draw_replacement() => eligibility.kan = Some(other),
                2 => eligibility.pon = Some(other),
                _ => {}
            }
            if other == discarder.next() && can_form_sequence_with(tile, hand) {
                eligibility.chi = Some(other);
            }
        }
        eligibility
    }

    /// Check every answer against the window and pick the branch to run.
    fn validate_answers(
        &self,
        state: &MatchState,
        window: &ReactionWindow,
        answers: &ReactionAnswers,
    ) -> EngineResult<Claim> {
        let eligibility = &window.eligibility;
        for (i, seat) in answers.ron.iter().enumerate() {
            if !eligibility.can_ron(*seat) || answers.ron[..i].contains(seat) {
                return Err(EngineError::InvalidCallClaim {
                    reason: "ron claimed by an ineligible seat",
                });
            }
        }
        if answers.kan && eligibility.kan.is_none() {
            return Err(EngineError::InvalidCallClaim {
                reason: "no seat may call kan on this discard",
            });
        }
        if answers.pon && eligibility.pon.is_none() {
            return Err(EngineError::InvalidCallClaim {
                reason: "no seat may call pon on this discard",
            });
        }
        let chi = match (answers.chi, eligibility.chi) {
            (None, _) => None,
            (Some(_), None) => {
                return Err(EngineError::InvalidCallClaim {
                    reason: "no seat may call chi on this discard",
                })
            }
            (Some(slot), Some(caller)) => {
                let fits = slot.partners(window.tile).map_or(false, |[a, b]| {
                    let hand = &state.hands[caller];
                    hand.contains(&a) && hand.contains(&b)
                });
                if !fits {
                    return Err(EngineError::InvalidCallClaim {
                        reason: "chi slot cannot be filled from the caller's hand",
                    });
                }
                Some((caller, slot))
            }
        };

        if !answers.ron.is_empty() {
            let mut claimants = answers.ron.clone();
            claimants.sort_by_key(|h| window.discarder.distance_to(*h));
            let doras = state.wall.doras();
            let mut wins = SmallVec::new();
            for winner in claimants {
                let ctx = WinContext {
                    seat: winner,
                    round_wind: state.round_wind,
                    hand: &state.hands[winner],
                    melds: &state.melds[winner],
                    win: WinTile::Ron(window.tile),
                    riichi: state.riichi[winner],
                };
                let evaluation =
                    evaluate(&ctx, &doras).ok_or(EngineError::HandNotComplete { seat: winner })?;
                let deltas = ron_deltas(winner, window.discarder, evaluation.fan);
                wins.push(WinOutcome {
                    winner,
                    win: WinTile::Ron(window.tile),
                    evaluation,
                    deltas,
                });
            }
            return Ok(Claim::Ron(wins));
        }
        if answers.kan {
            if let Some(caller) = eligibility.kan {
                if !state.wall.can_draw_replacement() {
                    return Err(EngineError::NoTilesRemaining);
                }
                return Ok(Claim::Kan(caller));
            }
        }
        if answers.pon {
            if let Some(caller) = eligibility.pon {
                return Ok(Claim::Pon(caller));
            }
        }
        Ok(match chi {
            Some((caller, slot)) => Claim::Chi(caller, slot),
            None => Claim::Pass,
        })
    }

    /// Move the just-discarded tile out of the discarder's pile and hand
    /// the turn to the caller.
    fn claim_discard(&self, state: &mut MatchState, discarder: House, caller: House) {
        state.discards[discarder].pop_back();
        state.last_discard = None;
        state.drawn = None;
        state.phase = Phase::Turn(caller);
    }

    /// Give `next` the turn and draw for it. Ends the round when the live
    /// wall is empty; returns the drawn tile otherwise.
    fn advance_turn(&self, state: &mut MatchState, next: House) -> Option<Tile> {
        match state.wall.draw() {
            Ok(tile) => {
                state.hands[next].push(tile);
                state.drawn = Some(tile);
                state.phase = Phase::Turn(next);
                debug!("{} draws, {} left", next, state.wall.live_count());
                Some(tile)
            }
            Err(_) => {
                info!("exhaustive draw");
                state.phase = Phase::Ended(RoundEnd::ExhaustiveDraw);
                None
            }
        }
    }

    fn draw_replacement(&self, state: &mut MatchState, seat: House) -> EngineResult<Tile> {
        let tile = state.wall.draw_replacement()?;
        state.hands[seat].push(tile);
        state.drawn = Some(tile);
        state.phase = Phase::Turn(seat);
        Ok(tile)
    }
}

fn apply_deltas(state: &mut MatchState, win: &WinOutcome) {
    for (house, delta) in win.deltas.iter() {
        state.points[house] += delta;
    }
}
