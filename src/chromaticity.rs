//! CIE 1931 chromaticity of the black-body locus
//!
//! Reference points from 2500K to 10000K in 100K steps. Used as the
//! target colors when mixing the warm and cold LEDs.

use crate::bounds::{ColorBounds, ColorTemperature, OutOfRange};

/// A single point on the black-body locus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaticityPoint {
    /// Temperature in hundreds of Kelvin
    pub temperature: ColorTemperature,
    pub x: f64,
    pub y: f64,
}

const fn point(temperature: ColorTemperature, x: f64, y: f64) -> ChromaticityPoint {
    ChromaticityPoint { temperature, x, y }
}

/// Number of reference points
pub const CHROMATICITY_LEN: usize = 76;

/// Temperatures covered by [`CHROMATICITY`]
pub const CHROMATICITY_BOUNDS: ColorBounds = ColorBounds::new(25, 100);

/// Black-body chromaticity, indexed by `temperature - 25`
pub const CHROMATICITY: [ChromaticityPoint; CHROMATICITY_LEN] = [
    point(25, 0.476_993_298, 0.413_675_29),
    point(26, 0.468_234_043, 0.412_299_05),
    point(27, 0.459_857_792, 0.410_598_847),
    point(28, 0.451_855_627, 0.408_629_76),
    point(29, 0.444_216_942, 0.406_440_454),
    point(30, 0.436_929_834, 0.404_073_617),
    point(31, 0.429_981_469, 0.401_566_449),
    point(32, 0.423_358_394, 0.398_951_179),
    point(33, 0.417_046_802, 0.396_255_578),
    point(34, 0.411_032_757, 0.393_503_449),
    point(35, 0.405_302_374, 0.390_715_097),
    point(36, 0.399_841_96, 0.387_907_751),
    point(37, 0.394_638_128, 0.385_095_955),
    point(38, 0.389_677_88, 0.382_291_914),
    point(39, 0.384_948_667, 0.379_505_808),
    point(40, 0.380_438_429, 0.376_746_07),
    point(41, 0.376_135_624, 0.374_019_62),
    point(42, 0.372_029_24, 0.371_332_087),
    point(43, 0.368_108_798, 0.368_687_987),
    point(44, 0.364_364_351, 0.366_090_887),
    point(45, 0.360_786_471, 0.363_543_545),
    point(46, 0.357_366_24, 0.361_048_031),
    point(47, 0.354_095_228, 0.358_605_83),
    point(48, 0.350_965_477, 0.356_217_933),
    point(49, 0.347_969_481, 0.353_884_917),
    point(50, 0.345_100_161, 0.351_607_005),
    point(51, 0.342_350_848, 0.349_384_133),
    point(52, 0.339_715_26, 0.347_215_989),
    point(53, 0.337_187_481, 0.345_102_064),
    point(54, 0.334_761_938, 0.343_041_682),
    point(55, 0.332_433_384, 0.341_034_034),
    point(56, 0.330_196_881, 0.339_078_203),
    point(57, 0.328_047_774, 0.337_173_188),
    point(58, 0.325_981_682, 0.335_317_921),
    point(59, 0.323_994_478, 0.333_511_285),
    point(60, 0.322_082_27, 0.331_752_126),
    point(61, 0.320_241_393, 0.330_039_268),
    point(62, 0.318_468_391, 0.328_371_519),
    point(63, 0.316_760_005, 0.326_747_68),
    point(64, 0.315_113_158, 0.325_166_555),
    point(65, 0.313_524_949, 0.323_626_954),
    point(66, 0.311_992_639, 0.322_127_697),
    point(67, 0.310_513_639, 0.320_667_621),
    point(68, 0.309_085_506, 0.319_245_579),
    point(69, 0.307_705_927, 0.317_860_448),
    point(70, 0.306_372_719, 0.316_511_126),
    point(71, 0.305_083_813, 0.315_196_535),
    point(72, 0.303_837_255, 0.313_915_625),
    point(73, 0.302_631_191, 0.312_667_37),
    point(74, 0.301_463_867, 0.311_450_773),
    point(75, 0.300_333_621, 0.310_264_865),
    point(76, 0.299_238_876, 0.309_108_702),
    point(77, 0.298_178_139, 0.307_981_37),
    point(78, 0.297_149_991, 0.306_881_982),
    point(79, 0.296_153_085, 0.305_809_677),
    point(80, 0.295_186_142, 0.304_763_623),
    point(81, 0.294_247_95, 0.303_743_012),
    point(82, 0.293_337_352, 0.302_747_064),
    point(83, 0.292_453_251, 0.301_775_023),
    point(84, 0.291_594_603, 0.300_826_159),
    point(85, 0.290_760_414, 0.299_899_765),
    point(86, 0.289_949_738, 0.298_995_157),
    point(87, 0.289_161_674, 0.298_111_676),
    point(88, 0.288_395_363, 0.297_248_683),
    point(89, 0.287_649_987, 0.296_405_562),
    point(90, 0.286_924_766, 0.295_581_717),
    point(91, 0.286_218_954, 0.294_776_573),
    point(92, 0.285_531_841, 0.293_989_574),
    point(93, 0.284_862_749, 0.293_220_182),
    point(94, 0.284_211_03, 0.292_467_88),
    point(95, 0.283_576_065, 0.291_732_165),
    point(96, 0.282_957_262, 0.291_012_554),
    point(97, 0.282_354_056, 0.290_308_579),
    point(98, 0.281_765_905, 0.289_619_789),
    point(99, 0.281_192_291, 0.288_945_746),
    point(100, 0.280_632_72, 0.288_286_03),
];

/// Look up the chromaticity of a color temperature
pub fn chromaticity(temperature: ColorTemperature) -> Result<ChromaticityPoint, OutOfRange> {
    let offset = CHROMATICITY_BOUNDS.offset_of(temperature)?;
    CHROMATICITY
        .get(offset)
        .copied()
        .ok_or_else(|| CHROMATICITY_BOUNDS.out_of_range(temperature))
}
