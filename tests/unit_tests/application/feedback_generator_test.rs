use speakwell::application::services::{FeedbackGenerator, FeedbackTemplate, RubricConfig};
use speakwell::domain::{AudioMetrics, Rubric, Transcript};

fn metrics(duration_s: f64, silence_ratio: f64, approx_peak_rate: f64) -> AudioMetrics {
    AudioMetrics {
        duration_s,
        silence_ratio,
        num_silence_segments: 0,
        approx_peak_rate,
    }
}

fn words(count: usize) -> Transcript {
    Transcript::new(vec!["word"; count].join(" "))
}

#[test]
fn given_healthy_delivery_when_generating_then_base_scores_are_kept() {
    let generator = FeedbackGenerator::default();
    let transcript = Transcript::new(
        "I really enjoy reading stories about brave animals who travel far away from their homes today",
    );
    assert_eq!(transcript.word_count(), 16);

    let result = generator.generate(&transcript, &metrics(20.0, 0.30, 1.5));

    assert_eq!(result.rubric, Rubric::clamped(4, 4, 3));
    assert!(!result.english_text.is_empty());
    assert!(!result.chinese_text.is_empty());
}

#[test]
fn given_long_pauses_and_fast_peaks_with_short_transcript_when_generating_then_all_penalties_apply() {
    let generator = FeedbackGenerator::default();

    let result = generator.generate(&words(3), &metrics(20.0, 0.60, 4.2));

    assert_eq!(result.rubric.pronunciation, 3);
    assert_eq!(result.rubric.fluency, 2);
    assert_eq!(result.rubric.intonation, 3);
}

#[test]
fn given_fallback_metrics_and_empty_transcript_when_generating_then_only_pronunciation_drops() {
    let generator = FeedbackGenerator::default();

    let result = generator.generate(&Transcript::empty(), &AudioMetrics::fallback());

    assert_eq!(result.rubric, Rubric::clamped(3, 4, 3));
}

#[test]
fn given_values_exactly_on_thresholds_when_generating_then_no_penalty_applies() {
    let generator = FeedbackGenerator::default();

    let at_max = generator.generate(&words(8), &metrics(10.0, 0.45, 3.0));
    let at_min = generator.generate(&words(8), &metrics(10.0, 0.45, 0.8));

    assert_eq!(at_max.rubric.fluency, 4);
    assert_eq!(at_min.rubric.fluency, 4);
    assert_eq!(at_max.rubric.pronunciation, 4);
}

#[test]
fn given_very_slow_peak_rate_when_generating_then_fluency_drops_once() {
    let generator = FeedbackGenerator::default();

    let result = generator.generate(&words(20), &metrics(10.0, 0.1, 0.5));

    assert_eq!(result.rubric.fluency, 3);
}

#[test]
fn given_durations_when_computing_expected_words_then_minimum_of_eight_applies() {
    let generator = FeedbackGenerator::default();

    assert_eq!(generator.expected_word_count(0.0), 8);
    assert_eq!(generator.expected_word_count(15.9), 8);
    assert_eq!(generator.expected_word_count(17.0), 8);
    assert_eq!(generator.expected_word_count(19.0), 9);
    assert_eq!(generator.expected_word_count(60.0), 30);
}

#[test]
fn given_word_count_equal_to_expected_when_generating_then_pronunciation_is_kept() {
    let generator = FeedbackGenerator::default();

    let result = generator.generate(&words(30), &metrics(60.0, 0.2, 1.2));

    assert_eq!(result.rubric.pronunciation, 4);
}

#[test]
fn given_low_base_scores_when_penalised_then_scores_never_fall_below_one() {
    let generator = FeedbackGenerator::new(
        RubricConfig {
            base_pronunciation: 1,
            base_fluency: 1,
            base_intonation: 1,
            ..RubricConfig::default()
        },
        FeedbackTemplate::default(),
    );

    let result = generator.generate(&Transcript::empty(), &metrics(30.0, 0.9, 10.0));

    assert_eq!(result.rubric, Rubric::clamped(1, 1, 1));
    assert_eq!(result.rubric.fluency, 1);
}

#[test]
fn given_high_base_scores_when_generating_then_scores_never_exceed_five() {
    let generator = FeedbackGenerator::new(
        RubricConfig {
            base_pronunciation: 9,
            base_fluency: 7,
            base_intonation: 6,
            ..RubricConfig::default()
        },
        FeedbackTemplate::default(),
    );

    let result = generator.generate(&words(10), &metrics(10.0, 0.2, 1.2));

    assert_eq!(result.rubric.pronunciation, 5);
    assert_eq!(result.rubric.fluency, 5);
    assert_eq!(result.rubric.intonation, 5);
}

#[test]
fn given_any_metrics_when_generating_then_feedback_text_is_the_fixed_template() {
    let generator = FeedbackGenerator::default();
    let template = FeedbackTemplate::default();

    let good = generator.generate(&words(20), &metrics(20.0, 0.1, 1.0));
    let poor = generator.generate(&Transcript::empty(), &metrics(5.0, 0.9, 9.0));

    assert_eq!(good.english_text, template.english);
    assert_eq!(poor.english_text, template.english);
    assert_eq!(good.chinese_text, poor.chinese_text);
}

#[test]
fn given_custom_template_when_generating_then_its_text_is_returned() {
    let template = FeedbackTemplate {
        english: "Keep going.".to_string(),
        chinese: "繼續加油。".to_string(),
    };
    let generator = FeedbackGenerator::new(RubricConfig::default(), template);

    let result = generator.generate(&words(10), &metrics(10.0, 0.2, 1.2));

    assert_eq!(result.english_text, "Keep going.");
    assert_eq!(result.chinese_text, "繼續加油。");
}

#[test]
fn given_thirty_second_clip_with_sixteen_words_when_generating_then_scores_are_four_four_three() {
    let generator = FeedbackGenerator::default();
    let metrics = AudioMetrics {
        duration_s: 30.0,
        silence_ratio: 0.1,
        num_silence_segments: 2,
        approx_peak_rate: 1.5,
    };

    let result = generator.generate(&words(16), &metrics);

    assert_eq!(result.rubric, Rubric::clamped(4, 4, 3));
}

#[test]
fn given_empty_transcript_for_forty_seconds_when_generating_then_pronunciation_is_three() {
    let generator = FeedbackGenerator::default();

    let result = generator.generate(&Transcript::empty(), &metrics(40.0, 0.2, 1.2));

    assert_eq!(result.rubric.pronunciation, 3);
}

#[test]
fn given_identical_inputs_when_generating_twice_then_results_are_equal() {
    let generator = FeedbackGenerator::default();
    let transcript = words(12);
    let metrics = metrics(25.0, 0.5, 3.5);

    assert_eq!(
        generator.generate(&transcript, &metrics),
        generator.generate(&transcript, &metrics)
    );
}

#[test]
fn given_sweep_of_inputs_when_generating_then_every_axis_stays_within_one_to_five() {
    let generator = FeedbackGenerator::default();

    for ratio_step in 0..=10 {
        for peak_step in 0..=20 {
            for word_count in [0, 1, 8, 15, 50, 200] {
                let metrics = metrics(30.0, ratio_step as f64 / 10.0, peak_step as f64 / 2.0);
                let rubric = generator.generate(&words(word_count), &metrics).rubric;

                for score in [rubric.pronunciation, rubric.fluency, rubric.intonation] {
                    assert!((1..=5).contains(&score));
                }
            }
        }
    }
}
