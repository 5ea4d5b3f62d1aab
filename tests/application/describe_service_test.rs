use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use auralens::application::services::ArtifactError;
use auralens::domain::{DescriptionVariant, Voice, identity_of};
use auralens::infrastructure::storage::ObjectAudioStore;

use crate::helpers::{
    CountingCaptioner, CountingSynthesizer, OTHER_PNG_BYTES, PNG_BYTES, TEST_TIMEOUT,
    build_stack, build_stack_with,
};

#[tokio::test]
async fn given_same_image_twice_when_describing_then_reuses_all_artifacts() {
    let stack = build_stack(ObjectAudioStore::in_memory());

    let first = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await
        .unwrap();
    let second = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await
        .unwrap();

    let expected_name = format!("{}_detailed_female_audio.wav", identity_of(PNG_BYTES));
    assert_eq!(first.description, second.description);
    assert_eq!(first.audio_url(), format!("/audio/{}", expected_name));
    assert_eq!(first.audio_url(), second.audio_url());
    assert!(first.audio.synthesized);
    assert!(!second.audio.synthesized);
    let cached = stack
        .descriptions
        .get(&first.identity, &DescriptionVariant::detailed())
        .await
        .unwrap();
    assert_eq!(cached.as_deref(), Some(first.description.as_str()));
    assert_eq!(stack.captioner.calls(), 1);
    assert_eq!(stack.synthesizer.calls(), 1);
}

#[tokio::test]
async fn given_racing_requests_for_uncached_image_then_captions_once() {
    let stack = build_stack_with(
        ObjectAudioStore::in_memory(),
        CountingCaptioner::with_delay(Duration::from_millis(50)),
        CountingSynthesizer::new(),
        TEST_TIMEOUT,
    );

    let tasks: Vec<_> = (0..2)
        .map(|_| {
            let service = Arc::clone(&stack.service);
            tokio::spawn(async move {
                service
                    .describe(
                        Bytes::from_static(PNG_BYTES),
                        DescriptionVariant::detailed(),
                        Voice::Female,
                    )
                    .await
            })
        })
        .collect();

    let outcomes: Vec<_> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .collect();

    assert_eq!(outcomes[0].description, outcomes[1].description);
    assert_eq!(stack.captioner.calls(), 1);
    assert_eq!(stack.synthesizer.calls(), 1);
}

#[tokio::test]
async fn given_new_voice_for_described_image_then_only_audio_is_generated() {
    let stack = build_stack(ObjectAudioStore::in_memory());

    let female = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await
        .unwrap();
    let male = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Male,
        )
        .await
        .unwrap();

    assert_eq!(female.description, male.description);
    assert_ne!(female.audio_url(), male.audio_url());
    assert_eq!(stack.captioner.calls(), 1);
    assert_eq!(stack.synthesizer.calls(), 2);
}

#[tokio::test]
async fn given_two_variants_when_describing_then_each_uses_its_profile() {
    let stack = build_stack(ObjectAudioStore::in_memory());

    let detailed = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await
        .unwrap();
    let simplified = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::simplified(),
            Voice::Female,
        )
        .await
        .unwrap();

    assert!(detailed.description.starts_with("a detailed caption"));
    assert!(simplified.description.starts_with("a brief caption"));
    assert_eq!(stack.captioner.calls(), 2);
}

#[tokio::test]
async fn given_different_images_when_describing_then_identities_differ() {
    let stack = build_stack(ObjectAudioStore::in_memory());

    let a = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await
        .unwrap();
    let b = stack
        .service
        .describe(
            Bytes::from_static(OTHER_PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await
        .unwrap();

    assert_ne!(a.identity, b.identity);
    assert_eq!(stack.captioner.calls(), 2);
}

#[tokio::test]
async fn given_slow_captioner_when_describing_then_times_out_and_caches_nothing() {
    let stack = build_stack_with(
        ObjectAudioStore::in_memory(),
        CountingCaptioner::with_delay(Duration::from_millis(500)),
        CountingSynthesizer::new(),
        Duration::from_millis(20),
    );

    let result = stack
        .service
        .describe(
            Bytes::from_static(PNG_BYTES),
            DescriptionVariant::detailed(),
            Voice::Female,
        )
        .await;

    assert!(matches!(
        result,
        Err(ArtifactError::CollaboratorTimeout { .. })
    ));
    assert!(stack.description_store.is_empty());
    assert_eq!(stack.synthesizer.calls(), 0);
}
