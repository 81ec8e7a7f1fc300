use std::io::Cursor;

use crate::application::ports::AudioExtractorError;

/// Encode mono f32 PCM as a 16-bit WAV file in memory.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, AudioExtractorError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| AudioExtractorError::EncodingFailed(e.to_string()))?;

        for &sample in samples {
            let clamped = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(clamped)
                .map_err(|e| AudioExtractorError::EncodingFailed(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| AudioExtractorError::EncodingFailed(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}
