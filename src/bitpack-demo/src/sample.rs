use bitpack::Codec;
use eyre::ensure;

// Accepted rounding error for the lossy float encodings.
const FLOAT_EPSILON: f64 = 1e-4;
const DOUBLE_EPSILON: f64 = 1e-9;

const UNSIGNED_BITS: u32 = 60;
const SIGNED_BITS: u32 = 30;

/// The sequence of values packed by the demo, in stream order.
#[derive(Debug)]
pub struct Sample {
    flag: bool,
    unsigned: u64,
    signed: i64,
    float: f32,
    double: f64,
    text: String,
}

impl Sample {
    pub fn new(text: String) -> Self {
        Self {
            flag: false,
            unsigned: 654321,
            signed: -1234,
            float: 123.45678,
            double: -123.45678,
            text,
        }
    }

    fn encode(&self) -> bitpack::Result<Vec<u8>> {
        let mut codec = Codec::new();
        codec
            .add_bit(self.flag)
            .add_uint(self.unsigned, UNSIGNED_BITS)?
            .add_int(self.signed, SIGNED_BITS)?
            .add_float(self.float)?
            .add_double(self.double)?
            .add_string(&self.text)?;

        log::debug!("Wrote {} bits", codec.written_bits());
        Ok(codec.into_inner())
    }

    fn decode(data: Vec<u8>) -> bitpack::Result<Self> {
        let mut codec = Codec::from_vec(data);

        Ok(Self {
            flag: codec.read_bit()?,
            unsigned: codec.read_uint(UNSIGNED_BITS)?,
            signed: codec.read_int(SIGNED_BITS)?,
            float: codec.read_float()?,
            double: codec.read_double()?,
            text: codec.read_str()?,
        })
    }

    /// Packs the sample, unpacks it from the raw bytes and checks
    /// that every value survived.
    pub fn run(self, exact: bool) -> eyre::Result<()> {
        let data = self.encode()?;
        log::info!("Packed sample into {} bytes", data.len());
        log::debug!("Serialized bytes: {}", hex(&data));

        let decoded = Self::decode(data)?;
        log::info!("bit: {}", decoded.flag);
        log::info!("uint{UNSIGNED_BITS}: {}", decoded.unsigned);
        log::info!("int{SIGNED_BITS}: {}", decoded.signed);
        log::info!("float: {}", decoded.float);
        log::info!("double: {}", decoded.double);
        log::info!("string: {:?}", decoded.text);

        let (float_epsilon, double_epsilon) = if exact {
            (0.0, 0.0)
        } else {
            (FLOAT_EPSILON, DOUBLE_EPSILON)
        };

        ensure!(decoded.flag == self.flag, "bit mismatch");
        ensure!(
            decoded.unsigned == self.unsigned,
            "uint mismatch: expected {}, got {}",
            self.unsigned,
            decoded.unsigned
        );
        ensure!(
            decoded.signed == self.signed,
            "int mismatch: expected {}, got {}",
            self.signed,
            decoded.signed
        );
        ensure!(
            (decoded.float as f64 - self.float as f64).abs() <= float_epsilon,
            "float mismatch: expected {}, got {}",
            self.float,
            decoded.float
        );
        ensure!(
            (decoded.double - self.double).abs() <= double_epsilon,
            "double mismatch: expected {}, got {}",
            self.double,
            decoded.double
        );
        ensure!(
            decoded.text == self.text,
            "string mismatch: expected {:?}, got {:?}",
            self.text,
            decoded.text
        );

        log::info!("All values survived the round trip");
        Ok(())
    }
}

fn hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
