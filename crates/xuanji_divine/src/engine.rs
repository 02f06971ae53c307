//! Request-level orchestration: pick the calculators a category needs,
//! run them, and assemble `visualData`.

use tracing::info;
use xuanji_search::PillarConfig;
use xuanji_time::{Clock, SystemClock};

use crate::bazi::compute_bazi;
use crate::error::DivinationError;
use crate::hexagram::compute_hexagram;
use crate::qimen::compute_qimen;
use crate::request::DivinationRequest;
use crate::response::{DivinationResult, parse_llm_reply};
use crate::visual::VisualData;

/// Stateless apart from its calendar conventions and clock.
#[derive(Debug, Clone)]
pub struct DivinationEngine<C: Clock = SystemClock> {
    clock: C,
    pillar_config: PillarConfig,
}

impl DivinationEngine<SystemClock> {
    /// Engine reading the wall clock in the pillar config's zone.
    pub fn with_system_clock(pillar_config: PillarConfig) -> Result<Self, DivinationError> {
        let clock = SystemClock::new(pillar_config.utc_offset_minutes)?;
        Ok(Self::new(clock, pillar_config))
    }
}

impl<C: Clock> DivinationEngine<C> {
    pub fn new(clock: C, pillar_config: PillarConfig) -> Self {
        Self {
            clock,
            pillar_config,
        }
    }

    pub fn pillar_config(&self) -> &PillarConfig {
        &self.pillar_config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run every calculator the request's category applies.
    ///
    /// Qimen additionally needs a birth day, bazi a full birth date; when
    /// those are missing the chart is simply absent.
    pub fn visual_data(&self, request: &DivinationRequest) -> Result<VisualData, DivinationError> {
        request.validate()?;
        let needs = request.category.applicability();
        let birth = request.birth_fields()?;

        let hexagram = if needs.needs_hexagram {
            Some(compute_hexagram(request.hexagram_mode()?, &self.clock)?)
        } else {
            None
        };
        let qimen = if needs.needs_qimen && birth.day.is_some() {
            Some(compute_qimen(birth, &self.clock)?)
        } else {
            None
        };
        let bazi = if needs.needs_bazi {
            compute_bazi(birth, &self.pillar_config)?
        } else {
            None
        };

        info!(
            category = request.category.key(),
            hexagram = hexagram.is_some(),
            qimen = qimen.is_some(),
            bazi = bazi.is_some(),
            "visual data computed"
        );
        Ok(VisualData {
            bazi,
            hexagram,
            qimen,
            ziwei: None,
            fengshui: None,
        })
    }

    /// Compute charts for `request` and combine them with the
    /// interpreter's raw reply.
    pub fn interpret(
        &self,
        request: &DivinationRequest,
        reply_text: &str,
    ) -> Result<DivinationResult, DivinationError> {
        let computed = self.visual_data(request)?;
        Ok(parse_llm_reply(reply_text, &computed))
    }
}
