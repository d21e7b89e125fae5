pub mod keyboard;
pub mod logging;
pub mod worker;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use horizon_audio::output::{self, AudioOutput, AudioProducer};
use horizon_backend::speech::SPEECH_SAMPLE_RATE_HZ;
use horizon_backend::vision;
use horizon_backend::GeminiClient;
use horizon_state::accessibility::{LoadedImage, VISION_ERROR};
use horizon_state::business::DRAFT_STORAGE_KEY;
use horizon_state::domain::Domain;
use horizon_state::request::{GenerateOutput, GenerateRequest, RequestId, GENERIC_ERROR};
use horizon_state::session::AppState;
use horizon_ui::accessibility::AccessibilityAction;
use horizon_ui::sidebar::SidebarAction;

use crate::worker::{spawn_generation_worker, GenerateJob, GenerateReply, GenerationChannels};

pub struct HorizonApp {
    state: AppState,
    channels: GenerationChannels,
    audio_output: Option<AudioOutput>,
    audio_producer: Option<AudioProducer>,
}

impl HorizonApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: GeminiClient) -> Self {
        horizon_ui::theme::apply_theme(&cc.egui_ctx);

        let draft = cc.storage.and_then(|s| s.get_string(DRAFT_STORAGE_KEY));
        let channels = spawn_generation_worker(client);

        let (audio_output, audio_producer) = match AudioOutput::new() {
            Ok((output, producer)) => (Some(output), Some(producer)),
            Err(e) => {
                log::warn!("audio output unavailable: {e}");
                (None, None)
            }
        };

        Self {
            state: AppState::new(draft),
            channels,
            audio_output,
            audio_producer,
        }
    }

    fn dispatch(&mut self, request: GenerateRequest, now: Instant) {
        let state = &mut self.state;
        let id = match &request {
            GenerateRequest::OrganizeResearch { .. } => {
                state.science.entry = None;
                state.science.job.begin()
            }
            GenerateRequest::Tutor { .. } => state.education.job.begin(),
            GenerateRequest::DescribeImage { .. } => {
                state.accessibility.description.clear();
                state.accessibility.vision.begin()
            }
            GenerateRequest::SynthesizeSpeech { .. } => state.accessibility.speech.begin(),
            GenerateRequest::AnalyzeHealth { .. } => {
                state.health.analysis = None;
                state.health.job.begin()
            }
            GenerateRequest::DraftEmail { .. } => {
                state.business.copied_at = None;
                state.business.job.begin()
            }
            GenerateRequest::GenerateDocs { .. } => {
                state.technology.docs.clear();
                state.technology.generation_started_at = Some(now);
                state.technology.job.begin()
            }
        };

        if self.channels.job_tx.send(GenerateJob { id, request }).is_err() {
            log::error!("generation worker is gone");
            fail_current(&mut self.state, id, GENERIC_ERROR);
        }
    }

    fn poll_generation_replies(&mut self, ctx: &egui::Context) {
        let mut received = false;
        while let Ok(reply) = self.channels.reply_rx.try_recv() {
            received = true;
            if let Some(samples) = apply_generate_reply(&mut self.state, reply) {
                self.play_speech(&samples);
            }
        }
        if received {
            ctx.request_repaint();
        }
    }

    fn play_speech(&mut self, samples: &[f32]) {
        let (Some(out), Some(producer)) = (&self.audio_output, &mut self.audio_producer) else {
            log::warn!("no audio output available for speech playback");
            return;
        };
        let resampled = output::resample_linear(samples, SPEECH_SAMPLE_RATE_HZ, out.sample_rate_hz());
        output::enqueue_mono(producer, &resampled, out.channels());
    }

    fn load_vision_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(vision::mime_for_extension);
        let Some(mime) = mime else {
            self.state.accessibility.vision.error =
                Some("Unsupported image type. Use JPG, PNG, or WebP.".to_string());
            return;
        };

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                self.state.accessibility.vision.error =
                    Some("Could not read that image file.".to_string());
                return;
            }
        };

        let decoded = match image::load_from_memory(&bytes) {
            Ok(img) => img.to_rgba8(),
            Err(e) => {
                log::warn!("could not decode {}: {e}", path.display());
                self.state.accessibility.vision.error =
                    Some("Could not decode that image file.".to_string());
                return;
            }
        };

        let texture = ctx.load_texture(
            "vision_upload",
            egui::ColorImage::from_rgba_unmultiplied(
                [decoded.width() as usize, decoded.height() as usize],
                decoded.as_raw(),
            ),
            egui::TextureOptions::LINEAR,
        );

        self.state.accessibility.clear_image();
        self.state.accessibility.image = Some(LoadedImage {
            bytes,
            mime_type: mime.to_string(),
            texture,
        });
    }

    fn any_loading(&self) -> bool {
        self.state.science.job.loading
            || self.state.education.job.loading
            || self.state.accessibility.vision.loading
            || self.state.accessibility.speech.loading
            || self.state.health.job.loading
            || self.state.business.job.loading
            || self.state.technology.job.loading
    }
}

impl eframe::App for HorizonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.state.tick_histories(now);
        if self.state.feedback.advance(now) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        self.poll_generation_replies(ctx);
        keyboard::handle_keyboard(ctx, &mut self.state);

        let sidebar_action = egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                horizon_ui::sidebar::sidebar_panel(ui, self.state.active_domain)
            })
            .inner;
        match sidebar_action {
            SidebarAction::None => {}
            SidebarAction::Select(domain) => self.state.active_domain = domain,
            SidebarAction::OpenFeedback => self.state.feedback.open = true,
        }

        let mut pending_request = None;
        let mut accessibility_action = AccessibilityAction::None;
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_domain {
            Domain::Home => {
                if let Some(domain) = horizon_ui::home::home_panel(ui) {
                    self.state.active_domain = domain;
                }
            }
            Domain::Science => {
                pending_request = horizon_ui::science::science_panel(ui, &mut self.state, now);
            }
            Domain::Education => {
                pending_request = horizon_ui::education::education_panel(ui, &mut self.state, now);
            }
            Domain::Accessibility => {
                accessibility_action =
                    horizon_ui::accessibility::accessibility_panel(ui, &mut self.state, now);
            }
            Domain::Health => {
                pending_request = horizon_ui::health::health_panel(ui, &mut self.state, now);
            }
            Domain::Business => {
                pending_request = horizon_ui::business::business_panel(ui, &mut self.state, now);
            }
            Domain::Technology => {
                pending_request = horizon_ui::technology::technology_panel(ui, &mut self.state, now);
            }
        });

        match accessibility_action {
            AccessibilityAction::None => {}
            AccessibilityAction::ImagePicked(path) => self.load_vision_image(ctx, path),
            AccessibilityAction::RemoveImage => self.state.accessibility.clear_image(),
            AccessibilityAction::Request(request) => pending_request = Some(request),
        }
        if let Some(request) = pending_request {
            self.dispatch(request, now);
        }

        horizon_ui::feedback::feedback_modal(ctx, &mut self.state.feedback, now);

        // Debounce commits must fire even when no input events arrive.
        if let Some(deadline) = self.state.next_commit_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if self.any_loading()
            || self.state.business.copied_notice_visible(now)
            || self.state.technology.model_notice_visible(now).is_some()
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(DRAFT_STORAGE_KEY, self.state.business.points.value().clone());
    }
}

fn fail_current(state: &mut AppState, id: RequestId, message: &str) {
    let jobs = [
        &mut state.science.job,
        &mut state.education.job,
        &mut state.accessibility.vision,
        &mut state.accessibility.speech,
        &mut state.health.job,
        &mut state.business.job,
        &mut state.technology.job,
    ];
    for job in jobs {
        if job.is_current(id) {
            job.fail(message);
            return;
        }
    }
}

/// Applies a worker reply to the panel that requested it. Replies whose id
/// is no longer current are dropped. Returns speech samples for the app to
/// enqueue; everything else is written into `state`. A failed call only
/// ever touches the panel's job slot, never any history buffer.
pub fn apply_generate_reply(state: &mut AppState, reply: GenerateReply) -> Option<Vec<f32>> {
    match reply.domain {
        Domain::Home => None,
        Domain::Science => {
            if !state.science.job.is_current(reply.id) {
                log::debug!("dropping stale science reply");
                return None;
            }
            match reply.result {
                Ok(GenerateOutput::Research(entry)) => {
                    state.science.job.finish();
                    state.science.entry = Some(entry);
                }
                _ => state.science.job.fail(GENERIC_ERROR),
            }
            None
        }
        Domain::Education => {
            if !state.education.job.is_current(reply.id) {
                log::debug!("dropping stale education reply");
                return None;
            }
            match reply.result {
                Ok(GenerateOutput::Lesson { mode, text }) => {
                    state.education.job.finish();
                    state.education.active_mode = mode;
                    state.education.explanation = text;
                }
                _ => state.education.job.fail(GENERIC_ERROR),
            }
            None
        }
        Domain::Accessibility => {
            if state.accessibility.vision.is_current(reply.id) {
                match reply.result {
                    Ok(GenerateOutput::ImageDescription(text)) => {
                        state.accessibility.vision.finish();
                        state.accessibility.description = text;
                    }
                    _ => state.accessibility.vision.fail(VISION_ERROR),
                }
                None
            } else if state.accessibility.speech.is_current(reply.id) {
                match reply.result {
                    Ok(GenerateOutput::Speech(samples)) => {
                        state.accessibility.speech.finish();
                        Some(samples)
                    }
                    _ => {
                        state.accessibility.speech.fail(GENERIC_ERROR);
                        None
                    }
                }
            } else {
                log::debug!("dropping stale accessibility reply");
                None
            }
        }
        Domain::Health => {
            if !state.health.job.is_current(reply.id) {
                log::debug!("dropping stale health reply");
                return None;
            }
            match reply.result {
                Ok(GenerateOutput::RiskReport(analysis)) => {
                    state.health.job.finish();
                    state.health.analysis = Some(analysis);
                }
                _ => state.health.job.fail(GENERIC_ERROR),
            }
            None
        }
        Domain::Business => {
            if !state.business.job.is_current(reply.id) {
                log::debug!("dropping stale business reply");
                return None;
            }
            match reply.result {
                Ok(GenerateOutput::Email(text)) => {
                    state.business.job.finish();
                    state.business.email = text;
                }
                _ => state.business.job.fail(GENERIC_ERROR),
            }
            None
        }
        Domain::Technology => {
            if !state.technology.job.is_current(reply.id) {
                log::debug!("dropping stale technology reply");
                return None;
            }
            state.technology.generation_started_at = None;
            match reply.result {
                Ok(GenerateOutput::Documentation(text)) => {
                    state.technology.job.finish();
                    state.technology.docs = text;
                }
                _ => state.technology.job.fail(GENERIC_ERROR),
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_backend::research::ResearchEntry;
    use horizon_backend::BackendError;

    fn research_reply(id: RequestId, result: Result<GenerateOutput, BackendError>) -> GenerateReply {
        GenerateReply {
            id,
            domain: Domain::Science,
            result,
        }
    }

    fn sample_entry() -> ResearchEntry {
        ResearchEntry {
            title: "Entry".to_string(),
            summary: String::new(),
            content: "body".to_string(),
            tags: vec![],
            category: "Hypothesis".to_string(),
        }
    }

    #[test]
    fn successful_reply_fills_the_result_slot() {
        let mut state = AppState::default();
        let id = state.science.job.begin();

        let samples =
            apply_generate_reply(&mut state, research_reply(id, Ok(GenerateOutput::Research(sample_entry()))));
        assert!(samples.is_none());
        assert!(!state.science.job.loading);
        assert_eq!(state.science.entry.as_ref().unwrap().title, "Entry");
    }

    #[test]
    fn stale_reply_is_dropped() {
        let mut state = AppState::default();
        let old = state.science.job.begin();
        // A newer request superseded the first one.
        let _new = state.science.job.begin();

        apply_generate_reply(&mut state, research_reply(old, Ok(GenerateOutput::Research(sample_entry()))));
        assert!(state.science.entry.is_none());
        // Still waiting on the newer request.
        assert!(state.science.job.loading);
    }

    #[test]
    fn failure_sets_the_error_and_leaves_buffers_alone() {
        let t0 = Instant::now();
        let mut state = AppState::default();
        state.science.notes.set("important notes".to_string(), t0);
        state.tick_histories(t0 + Duration::from_secs(1));
        assert!(state.science.notes.can_undo());

        let id = state.science.job.begin();
        apply_generate_reply(&mut state, research_reply(id, Err(BackendError::EmptyResponse)));

        assert_eq!(state.science.job.error.as_deref(), Some(GENERIC_ERROR));
        assert!(!state.science.job.loading);
        // The failed call must not mutate, clear, or roll back any buffer.
        assert_eq!(state.science.notes.value(), "important notes");
        assert!(state.science.notes.can_undo());
    }

    #[test]
    fn speech_reply_hands_samples_back_for_playback() {
        let mut state = AppState::default();
        let id = state.accessibility.speech.begin();

        let samples = apply_generate_reply(
            &mut state,
            GenerateReply {
                id,
                domain: Domain::Accessibility,
                result: Ok(GenerateOutput::Speech(vec![0.0, 0.5])),
            },
        );
        assert_eq!(samples.unwrap().len(), 2);
        assert!(!state.accessibility.speech.loading);
    }

    #[test]
    fn accessibility_replies_route_by_job_slot() {
        let mut state = AppState::default();
        let vision_id = state.accessibility.vision.begin();

        apply_generate_reply(
            &mut state,
            GenerateReply {
                id: vision_id,
                domain: Domain::Accessibility,
                result: Ok(GenerateOutput::ImageDescription("a red door".to_string())),
            },
        );
        assert_eq!(state.accessibility.description, "a red door");
        assert!(state.accessibility.speech.error.is_none());
    }

    #[test]
    fn technology_failure_stops_the_progress_checklist() {
        let now = Instant::now();
        let mut state = AppState::default();
        state.technology.generation_started_at = Some(now);
        let id = state.technology.job.begin();

        apply_generate_reply(
            &mut state,
            GenerateReply {
                id,
                domain: Domain::Technology,
                result: Err(BackendError::EmptyResponse),
            },
        );
        assert!(state.technology.generation_started_at.is_none());
        assert_eq!(state.technology.job.error.as_deref(), Some(GENERIC_ERROR));
    }
}
