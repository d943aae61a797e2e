//! The story progress vector.
//!
//! Each storyline is an ordered stage enum plus a handful of write-once
//! side-choice tags. Stages only move forward and tags, once written, keep
//! their first value, so a branch taken can never be untaken. Every mutator
//! reports whether it changed anything, which is what makes one-shot prompts
//! and act transitions idempotent.

use std::collections::BTreeSet;
use std::fmt;

use crate::enemy::Boss;

/// The acts, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Act {
    /// Eridani Prime, the crash site.
    Eridani,
    /// Velyra IX, under Governor Karn.
    Velyra,
    /// Aurelion Prime, the city of light.
    Aurelion,
}

impl fmt::Display for Act {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eridani => "Eridani Prime",
            Self::Velyra => "Velyra IX",
            Self::Aurelion => "Aurelion Prime",
        })
    }
}

/// Boss lifecycle. `Fallen` is a pending trigger; `Acknowledged` means the
/// outer loop has consumed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum BossProgress {
    /// Still standing.
    #[default]
    Alive,
    /// Defeated, follow-up not yet run.
    Fallen,
    /// Defeated and follow-up done.
    Acknowledged,
}

/// Quest items that may only ever be obtained once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UniqueItem {
    /// The neural translator chip.
    Translator,
    /// The propulsion crystal needed to leave Eridani.
    PropulsionCrystal,
}

/// The choice made right after the crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashChoice {
    /// Pull the survivors out of the wreck.
    RescueSurvivors,
    /// Strip the wreck for parts.
    SalvageWreck,
}

/// Outcome of the merchant's crystal offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerchantDeal {
    /// Handed over the crew member for the crystal.
    Sacrificed,
    /// Refused the trade; Yara noticed.
    Refused,
}

/// Velyra IX storyline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VelyraStage {
    /// Not reached yet.
    #[default]
    Dormant,
    /// Landed at the rebel base.
    Arrived,
    /// Strategy chosen with Yara.
    Planned,
    /// The prison has been opened, one way or another.
    PrisonFreed,
    /// Karn is dead; the aftermath has not played yet.
    KarnFallen,
    /// The aftermath is over and the ship is ready for Aurelion.
    Resolved,
}

/// How the rebels approach Karn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Scout the patrols before striking.
    StudyFirst,
    /// Hit the nearest garrison at once.
    AttackFirst,
}

/// How the prison was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrisonPlan {
    /// Raided the civilian warehouses for supplies.
    Robbery,
    /// Bribed Karn's general for missiles.
    Corruption {
        /// Whether the bribe went through cleanly.
        succeeded: bool,
    },
}

/// Who received the only dose of nanomedicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Survivor {
    /// Yara lived.
    Yara,
    /// Narek lived.
    Narek,
    /// There was no dose; neither made it.
    Neither,
}

/// Aurelion Prime storyline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AurelionStage {
    /// Not reached yet.
    #[default]
    Dormant,
    /// Landed in the golden district.
    Arrived,
    /// The Node's illusions have been dealt with.
    NodeResolved,
}

/// The identity used on Aurelion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cover {
    /// Blend in as a citizen.
    Infiltrate,
    /// Arrive openly as a liberator.
    Reveal,
}

/// What was done with the Node's illusion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illusions {
    /// Shut it down and let the city see itself.
    Shattered,
    /// Leave it running.
    Preserved,
}

/// Answer to Seren Taal's offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroneAnswer {
    /// Joined Taal.
    Alliance,
    /// Refused and fought.
    Defiance,
}

macro_rules! define_facts {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        /// A named, readable fact derived from the story vector.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Fact {
            $($(#[$meta])* $variant,)*
        }

        impl Fact {
            /// Every fact, in story order.
            pub const ALL: &[Fact] = &[$(Fact::$variant),*];

            /// Snake-case name used in logs and the status view.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

define_facts! {
    /// The crash choice was to rescue survivors.
    RescuedSurvivors => "rescued_survivors",
    /// The crash choice was to salvage the wreck.
    SalvagedWreck => "salvaged_wreck",
    /// Ralen has been met.
    MetRalen => "met_ralen",
    /// A crew member was traded for the crystal.
    MerchantSacrificed => "merchant_sacrifice",
    /// The merchant was refused and Yara met.
    MetYara => "met_yara",
    /// The propulsion crystal has been obtained.
    HasCrystal => "has_crystal",
    /// The translator chip has been obtained.
    HasTranslator => "has_translator",
    /// Captain Vorn is dead.
    VornDefeated => "vorn_defeated",
    /// Yara's rebels studied Karn's patrols first.
    StudiedFirst => "study_first",
    /// Yara's rebels struck first.
    AttackedFirst => "attack_first",
    /// The civilian warehouses were robbed.
    CiviliansRobbed => "robbed_civilians",
    /// Karn's general was bribed.
    GeneralCorrupted => "corrupted_general",
    /// Missiles were obtained through the general.
    MissilesObtained => "missiles_obtained",
    /// The central prison is open.
    PrisonLiberated => "prison_liberated",
    /// The civil-quarter ambush has played.
    VelyraAmbushDone => "velyra_ambush_done",
    /// Governor Karn is dead.
    KarnDefeated => "karn_defeated",
    /// Yara is alive.
    YaraAlive => "yara_alive",
    /// Narek is alive.
    NarekAlive => "narek_alive",
    /// Aurelion approached under cover.
    ChoseInfiltrate => "chose_infiltrate",
    /// Aurelion approached openly.
    ChoseReveal => "chose_reveal",
    /// The hologram-quarter ambush has played.
    AurelionAmbushDone => "aurelion_ambush_done",
    /// The Node's illusions were shattered.
    IllusionsShattered => "illusions_shattered",
    /// The Node's illusions were kept.
    IllusionsPreserved => "illusions_preserved",
    /// The palace guardians are down.
    GuardiansCleared => "guardians_cleared",
    /// The alliance with Taal was accepted.
    AllianceAccepted => "alliance_accepted",
    /// Seren Taal is dead.
    TaalDefeated => "taal_defeated",
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write a side tag if it is still empty.
fn settle<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

/// Move an ordered stage forward. Never moves it back.
fn advance<T: Ord + Copy>(slot: &mut T, to: T) -> bool {
    if to > *slot {
        *slot = to;
        true
    } else {
        false
    }
}

/// Raise a boolean guard. Returns true only the first time.
fn raise(slot: &mut bool) -> bool {
    !std::mem::replace(slot, true)
}

/// The story progress vector: the sole memory of narrative progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    act: Act,
    unique: BTreeSet<UniqueItem>,
    crash: Option<CrashChoice>,
    met_ralen: bool,
    merchant: Option<MerchantDeal>,
    vorn: BossProgress,
    velyra: VelyraStage,
    strategy: Option<Strategy>,
    prison_plan: Option<PrisonPlan>,
    velyra_ambush_done: bool,
    survivor: Option<Survivor>,
    aurelion: AurelionStage,
    cover: Option<Cover>,
    aurelion_ambush_done: bool,
    illusions: Option<Illusions>,
    guardians_cleared: bool,
    throne: Option<ThroneAnswer>,
    taal: BossProgress,
}

impl Default for Story {
    fn default() -> Self {
        Self::new()
    }
}

impl Story {
    /// A fresh story at the start of the Eridani act.
    pub fn new() -> Self {
        Self {
            act: Act::Eridani,
            unique: BTreeSet::new(),
            crash: None,
            met_ralen: false,
            merchant: None,
            vorn: BossProgress::Alive,
            velyra: VelyraStage::Dormant,
            strategy: None,
            prison_plan: None,
            velyra_ambush_done: false,
            survivor: None,
            aurelion: AurelionStage::Dormant,
            cover: None,
            aurelion_ambush_done: false,
            illusions: None,
            guardians_cleared: false,
            throne: None,
            taal: BossProgress::Alive,
        }
    }

    /// The act whose room graph is currently built.
    pub fn act(&self) -> Act {
        self.act
    }

    /// Move to a later act.
    pub fn enter_act(&mut self, act: Act) -> bool {
        advance(&mut self.act, act)
    }

    /// Whether a unique item has already been obtained.
    pub fn has_unique(&self, item: UniqueItem) -> bool {
        self.unique.contains(&item)
    }

    /// Record a unique item. Returns false if it was already obtained.
    pub fn obtain_unique(&mut self, item: UniqueItem) -> bool {
        self.unique.insert(item)
    }

    /// The crash choice, once made.
    pub fn crash(&self) -> Option<CrashChoice> {
        self.crash
    }

    /// Record the crash choice.
    pub fn choose_crash(&mut self, choice: CrashChoice) -> bool {
        settle(&mut self.crash, choice)
    }

    /// Whether Ralen has been met.
    pub fn met_ralen(&self) -> bool {
        self.met_ralen
    }

    /// Record meeting Ralen.
    pub fn meet_ralen(&mut self) -> bool {
        raise(&mut self.met_ralen)
    }

    /// The merchant deal, once settled.
    pub fn merchant(&self) -> Option<MerchantDeal> {
        self.merchant
    }

    /// Record the merchant deal.
    pub fn settle_merchant(&mut self, deal: MerchantDeal) -> bool {
        settle(&mut self.merchant, deal)
    }

    /// Captain Vorn's progress.
    pub fn vorn(&self) -> BossProgress {
        self.vorn
    }

    /// Seren Taal's progress.
    pub fn taal(&self) -> BossProgress {
        self.taal
    }

    /// Velyra IX stage.
    pub fn velyra(&self) -> VelyraStage {
        self.velyra
    }

    /// Move the Velyra storyline forward.
    pub fn advance_velyra(&mut self, stage: VelyraStage) -> bool {
        advance(&mut self.velyra, stage)
    }

    /// The rebel strategy, once chosen.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Record the rebel strategy and advance to `Planned`.
    pub fn choose_strategy(&mut self, strategy: Strategy) -> bool {
        let fresh = settle(&mut self.strategy, strategy);
        if fresh {
            self.advance_velyra(VelyraStage::Planned);
        }
        fresh
    }

    /// How the prison was opened.
    pub fn prison_plan(&self) -> Option<PrisonPlan> {
        self.prison_plan
    }

    /// Record the prison plan and advance to `PrisonFreed`.
    pub fn choose_prison_plan(&mut self, plan: PrisonPlan) -> bool {
        let fresh = settle(&mut self.prison_plan, plan);
        if fresh {
            self.advance_velyra(VelyraStage::PrisonFreed);
        }
        fresh
    }

    /// Whether the civil-quarter ambush has fired.
    pub fn velyra_ambush_done(&self) -> bool {
        self.velyra_ambush_done
    }

    /// Arm the civil-quarter ambush guard.
    pub fn mark_velyra_ambush(&mut self) -> bool {
        raise(&mut self.velyra_ambush_done)
    }

    /// Who survived the aftermath on Velyra.
    pub fn survivor(&self) -> Option<Survivor> {
        self.survivor
    }

    /// Record the survivor and mark the Velyra storyline resolved.
    pub fn choose_survivor(&mut self, survivor: Survivor) -> bool {
        let fresh = settle(&mut self.survivor, survivor);
        if fresh {
            self.advance_velyra(VelyraStage::Resolved);
        }
        fresh
    }

    /// Aurelion Prime stage.
    pub fn aurelion(&self) -> AurelionStage {
        self.aurelion
    }

    /// Move the Aurelion storyline forward.
    pub fn advance_aurelion(&mut self, stage: AurelionStage) -> bool {
        advance(&mut self.aurelion, stage)
    }

    /// The Aurelion cover, once chosen.
    pub fn cover(&self) -> Option<Cover> {
        self.cover
    }

    /// Record the Aurelion cover.
    pub fn choose_cover(&mut self, cover: Cover) -> bool {
        settle(&mut self.cover, cover)
    }

    /// Whether the hologram-quarter ambush has fired.
    pub fn aurelion_ambush_done(&self) -> bool {
        self.aurelion_ambush_done
    }

    /// Arm the hologram-quarter ambush guard.
    pub fn mark_aurelion_ambush(&mut self) -> bool {
        raise(&mut self.aurelion_ambush_done)
    }

    /// What was done at the Node.
    pub fn illusions(&self) -> Option<Illusions> {
        self.illusions
    }

    /// Record the Node decision and advance to `NodeResolved`.
    pub fn choose_illusions(&mut self, illusions: Illusions) -> bool {
        let fresh = settle(&mut self.illusions, illusions);
        if fresh {
            self.advance_aurelion(AurelionStage::NodeResolved);
        }
        fresh
    }

    /// Whether the palace guardians have all fallen.
    pub fn guardians_cleared(&self) -> bool {
        self.guardians_cleared
    }

    /// Record that the palace guardians have all fallen.
    pub fn mark_guardians_cleared(&mut self) -> bool {
        raise(&mut self.guardians_cleared)
    }

    /// The answer given to Taal.
    pub fn throne(&self) -> Option<ThroneAnswer> {
        self.throne
    }

    /// Record the answer given to Taal.
    pub fn answer_throne(&mut self, answer: ThroneAnswer) -> bool {
        settle(&mut self.throne, answer)
    }

    /// Record a boss death. Returns true only the first time.
    pub fn record_defeat(&mut self, boss: Boss) -> bool {
        match boss {
            Boss::Vorn => advance(&mut self.vorn, BossProgress::Fallen),
            Boss::Karn => advance(&mut self.velyra, VelyraStage::KarnFallen),
            Boss::Taal => advance(&mut self.taal, BossProgress::Fallen),
        }
    }

    /// Consume a pending boss trigger. Returns true only if it was pending.
    pub fn acknowledge(&mut self, boss: Boss) -> bool {
        let slot = match boss {
            Boss::Vorn => &mut self.vorn,
            Boss::Taal => &mut self.taal,
            Boss::Karn => return false,
        };
        if *slot == BossProgress::Fallen {
            *slot = BossProgress::Acknowledged;
            true
        } else {
            false
        }
    }

    /// Whether a boss is dead.
    pub fn is_defeated(&self, boss: Boss) -> bool {
        match boss {
            Boss::Vorn => self.vorn >= BossProgress::Fallen,
            Boss::Karn => self.velyra >= VelyraStage::KarnFallen,
            Boss::Taal => self.taal >= BossProgress::Fallen,
        }
    }

    /// Whether Yara is still alive.
    pub fn yara_alive(&self) -> bool {
        !matches!(self.survivor, Some(Survivor::Narek | Survivor::Neither))
    }

    /// Whether Narek is out of prison and still alive.
    pub fn narek_alive(&self) -> bool {
        self.prison_plan.is_some()
            && !matches!(self.survivor, Some(Survivor::Yara | Survivor::Neither))
    }

    /// Evaluate a named fact.
    pub fn holds(&self, fact: Fact) -> bool {
        match fact {
            Fact::RescuedSurvivors => self.crash == Some(CrashChoice::RescueSurvivors),
            Fact::SalvagedWreck => self.crash == Some(CrashChoice::SalvageWreck),
            Fact::MetRalen => self.met_ralen,
            Fact::MerchantSacrificed => self.merchant == Some(MerchantDeal::Sacrificed),
            Fact::MetYara => self.merchant == Some(MerchantDeal::Refused),
            Fact::HasCrystal => self.has_unique(UniqueItem::PropulsionCrystal),
            Fact::HasTranslator => self.has_unique(UniqueItem::Translator),
            Fact::VornDefeated => self.is_defeated(Boss::Vorn),
            Fact::StudiedFirst => self.strategy == Some(Strategy::StudyFirst),
            Fact::AttackedFirst => self.strategy == Some(Strategy::AttackFirst),
            Fact::CiviliansRobbed => self.prison_plan == Some(PrisonPlan::Robbery),
            Fact::GeneralCorrupted | Fact::MissilesObtained => {
                matches!(self.prison_plan, Some(PrisonPlan::Corruption { .. }))
            }
            Fact::PrisonLiberated => self.velyra >= VelyraStage::PrisonFreed,
            Fact::VelyraAmbushDone => self.velyra_ambush_done,
            Fact::KarnDefeated => self.is_defeated(Boss::Karn),
            Fact::YaraAlive => self.yara_alive(),
            Fact::NarekAlive => self.narek_alive(),
            Fact::ChoseInfiltrate => self.cover == Some(Cover::Infiltrate),
            Fact::ChoseReveal => self.cover == Some(Cover::Reveal),
            Fact::AurelionAmbushDone => self.aurelion_ambush_done,
            Fact::IllusionsShattered => self.illusions == Some(Illusions::Shattered),
            Fact::IllusionsPreserved => self.illusions == Some(Illusions::Preserved),
            Fact::GuardiansCleared => self.guardians_cleared,
            Fact::AllianceAccepted => self.throne == Some(ThroneAnswer::Alliance),
            Fact::TaalDefeated => self.is_defeated(Boss::Taal),
        }
    }

    /// All facts that currently hold, in story order.
    pub fn facts(&self) -> Vec<Fact> {
        Fact::ALL.iter().copied().filter(|f| self.holds(*f)).collect()
    }
}
