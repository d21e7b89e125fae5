use std::sync::mpsc;

use horizon_backend::{docgen, health, research, speech, tutor, vision, writing};
use horizon_backend::{BackendError, GeminiClient};
use horizon_state::domain::Domain;
use horizon_state::request::{GenerateOutput, GenerateRequest, RequestId};

pub struct GenerateJob {
    pub id: RequestId,
    pub request: GenerateRequest,
}

pub struct GenerateReply {
    pub id: RequestId,
    pub domain: Domain,
    pub result: Result<GenerateOutput, BackendError>,
}

pub struct GenerationChannels {
    pub job_tx: mpsc::Sender<GenerateJob>,
    pub reply_rx: mpsc::Receiver<GenerateReply>,
}

/// One worker thread owns the HTTP client and serves every panel. It exits
/// when the app side of either channel is dropped.
pub fn spawn_generation_worker(client: GeminiClient) -> GenerationChannels {
    let (job_tx, job_rx) = mpsc::channel::<GenerateJob>();
    let (reply_tx, reply_rx) = mpsc::channel();

    std::thread::spawn(move || loop {
        let Ok(job) = job_rx.recv() else {
            return;
        };
        let domain = job.request.domain();
        let result = run_request(&client, job.request);
        if let Err(err) = &result {
            log::warn!("generation for {domain:?} failed: {err}");
        }
        if reply_tx
            .send(GenerateReply {
                id: job.id,
                domain,
                result,
            })
            .is_err()
        {
            return;
        }
    });

    GenerationChannels { job_tx, reply_rx }
}

fn run_request(
    client: &GeminiClient,
    request: GenerateRequest,
) -> Result<GenerateOutput, BackendError> {
    match request {
        GenerateRequest::OrganizeResearch { notes, entry_type } => {
            research::organize_research(client, &notes, entry_type.id())
                .map(GenerateOutput::Research)
        }
        GenerateRequest::Tutor {
            topic,
            level,
            style,
            mode,
        } => tutor::tutor_response(client, &topic, level.id(), style.label(), mode)
            .map(|text| GenerateOutput::Lesson { mode, text }),
        GenerateRequest::DescribeImage { image, mime_type } => {
            vision::describe_image(client, &image, &mime_type).map(GenerateOutput::ImageDescription)
        }
        GenerateRequest::SynthesizeSpeech { text } => speech::synthesize_speech(client, &text)
            .map(|bytes| GenerateOutput::Speech(speech::pcm16_to_f32(&bytes))),
        GenerateRequest::AnalyzeHealth { patient_data } => {
            health::analyze_health_risks(client, &patient_data).map(GenerateOutput::RiskReport)
        }
        GenerateRequest::DraftEmail { points } => {
            writing::draft_email(client, &points).map(GenerateOutput::Email)
        }
        GenerateRequest::GenerateDocs { code, model } => {
            docgen::generate_documentation(client, &code, model).map(GenerateOutput::Documentation)
        }
    }
}
