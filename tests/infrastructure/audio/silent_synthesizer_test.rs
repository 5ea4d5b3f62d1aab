use auralens::application::ports::SpeechSynthesizer;
use auralens::domain::Voice;
use auralens::infrastructure::audio::SilentSynthesizer;

fn data_len(wav: &[u8]) -> u32 {
    u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]])
}

#[test]
fn given_duration_when_rendering_then_produces_pcm_wav_header() {
    let wav = SilentSynthesizer::render(1000);

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(data_len(&wav), 32_000);
    assert_eq!(wav.len(), 44 + 32_000);
}

#[tokio::test]
async fn given_longer_text_when_synthesizing_then_clip_is_longer() {
    let short = SilentSynthesizer
        .synthesize("one", Voice::Female)
        .await
        .unwrap();
    let long = SilentSynthesizer
        .synthesize("one two three four", Voice::Male)
        .await
        .unwrap();

    assert!(data_len(&long) > data_len(&short));
}
