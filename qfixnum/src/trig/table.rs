use super::{Segment, SegmentTable};
use crate::Q15;

const fn seg(slope: i16, intercept: i16) -> Segment {
    Segment {
        slope: Q15::from_raw(slope),
        intercept: Q15::from_raw(intercept),
    }
}

/// One period of `sin(pi * x)` over `x` in `[-1, 1)`, indexed by the upper byte
/// of the two's complement input: entries 0 to 127 cover `[0, 1)` and entries
/// 128 to 255 cover `[-1, 0)`.
/// The maximum error against `32768 * sin(pi * x)` is below 5 LSB.
pub static SINE_SEGMENTS: SegmentTable = SegmentTable([
    seg(804, 0), seg(804, 804), seg(802, 1608), seg(802, 2410),
    seg(799, 3212), seg(797, 4011), seg(794, 4808), seg(791, 5602),
    seg(786, 6393), seg(783, 7179), seg(777, 7962), seg(773, 8739),
    seg(766, 9512), seg(761, 10278), seg(754, 11039), seg(746, 11793),
    seg(740, 12539), seg(731, 13279), seg(722, 14010), seg(714, 14732),
    seg(705, 15446), seg(695, 16151), seg(684, 16846), seg(674, 17530),
    seg(664, 18204), seg(651, 18868), seg(640, 19519), seg(628, 20159),
    seg(616, 20787), seg(602, 21403), seg(589, 22005), seg(576, 22594),
    seg(561, 23170), seg(548, 23731), seg(532, 24279), seg(518, 24811),
    seg(503, 25329), seg(487, 25832), seg(471, 26319), seg(455, 26790),
    seg(438, 27245), seg(422, 27683), seg(405, 28105), seg(388, 28510),
    seg(370, 28898), seg(353, 29268), seg(335, 29621), seg(317, 29956),
    seg(298, 30273), seg(281, 30571), seg(261, 30852), seg(243, 31113),
    seg(224, 31356), seg(205, 31580), seg(186, 31785), seg(166, 31971),
    seg(148, 32137), seg(127, 32285), seg(109, 32412), seg(88, 32521),
    seg(69, 32609), seg(50, 32678), seg(29, 32728), seg(10, 32757),
    seg(-10, 32767), seg(-29, 32757), seg(-50, 32728), seg(-69, 32678),
    seg(-88, 32609), seg(-109, 32521), seg(-127, 32412), seg(-148, 32285),
    seg(-166, 32137), seg(-186, 31971), seg(-205, 31785), seg(-224, 31580),
    seg(-243, 31356), seg(-261, 31113), seg(-281, 30852), seg(-298, 30571),
    seg(-317, 30273), seg(-335, 29956), seg(-353, 29621), seg(-370, 29268),
    seg(-388, 28898), seg(-405, 28510), seg(-422, 28105), seg(-438, 27683),
    seg(-455, 27245), seg(-471, 26790), seg(-487, 26319), seg(-503, 25832),
    seg(-518, 25329), seg(-532, 24811), seg(-548, 24279), seg(-561, 23731),
    seg(-576, 23170), seg(-589, 22594), seg(-602, 22005), seg(-616, 21403),
    seg(-628, 20787), seg(-640, 20159), seg(-651, 19519), seg(-664, 18868),
    seg(-674, 18204), seg(-684, 17530), seg(-695, 16846), seg(-705, 16151),
    seg(-714, 15446), seg(-722, 14732), seg(-731, 14010), seg(-740, 13279),
    seg(-746, 12539), seg(-754, 11793), seg(-761, 11039), seg(-766, 10278),
    seg(-773, 9512), seg(-777, 8739), seg(-783, 7962), seg(-786, 7179),
    seg(-791, 6393), seg(-794, 5602), seg(-797, 4808), seg(-799, 4011),
    seg(-802, 3212), seg(-802, 2410), seg(-804, 1608), seg(-804, 804),
    seg(-804, 0), seg(-804, -804), seg(-802, -1608), seg(-802, -2410),
    seg(-799, -3212), seg(-797, -4011), seg(-794, -4808), seg(-791, -5602),
    seg(-786, -6393), seg(-783, -7179), seg(-777, -7962), seg(-773, -8739),
    seg(-766, -9512), seg(-761, -10278), seg(-754, -11039), seg(-746, -11793),
    seg(-740, -12539), seg(-731, -13279), seg(-722, -14010), seg(-714, -14732),
    seg(-705, -15446), seg(-695, -16151), seg(-684, -16846), seg(-674, -17530),
    seg(-664, -18204), seg(-651, -18868), seg(-640, -19519), seg(-628, -20159),
    seg(-616, -20787), seg(-602, -21403), seg(-589, -22005), seg(-576, -22594),
    seg(-561, -23170), seg(-548, -23731), seg(-532, -24279), seg(-518, -24811),
    seg(-503, -25329), seg(-487, -25832), seg(-471, -26319), seg(-455, -26790),
    seg(-438, -27245), seg(-422, -27683), seg(-405, -28105), seg(-388, -28510),
    seg(-370, -28898), seg(-353, -29268), seg(-335, -29621), seg(-317, -29956),
    seg(-298, -30273), seg(-281, -30571), seg(-261, -30852), seg(-243, -31113),
    seg(-224, -31356), seg(-205, -31580), seg(-186, -31785), seg(-166, -31971),
    seg(-148, -32137), seg(-127, -32285), seg(-109, -32412), seg(-88, -32521),
    seg(-69, -32609), seg(-50, -32678), seg(-29, -32728), seg(-10, -32757),
    seg(10, -32767), seg(29, -32757), seg(50, -32728), seg(69, -32678),
    seg(88, -32609), seg(109, -32521), seg(127, -32412), seg(148, -32285),
    seg(166, -32137), seg(186, -31971), seg(205, -31785), seg(224, -31580),
    seg(243, -31356), seg(261, -31113), seg(281, -30852), seg(298, -30571),
    seg(317, -30273), seg(335, -29956), seg(353, -29621), seg(370, -29268),
    seg(388, -28898), seg(405, -28510), seg(422, -28105), seg(438, -27683),
    seg(455, -27245), seg(471, -26790), seg(487, -26319), seg(503, -25832),
    seg(518, -25329), seg(532, -24811), seg(548, -24279), seg(561, -23731),
    seg(576, -23170), seg(589, -22594), seg(602, -22005), seg(616, -21403),
    seg(628, -20787), seg(640, -20159), seg(651, -19519), seg(664, -18868),
    seg(674, -18204), seg(684, -17530), seg(695, -16846), seg(705, -16151),
    seg(714, -15446), seg(722, -14732), seg(731, -14010), seg(740, -13279),
    seg(746, -12539), seg(754, -11793), seg(761, -11039), seg(766, -10278),
    seg(773, -9512), seg(777, -8739), seg(783, -7962), seg(786, -7179),
    seg(791, -6393), seg(794, -5602), seg(797, -4808), seg(799, -4011),
    seg(802, -3212), seg(802, -2410), seg(804, -1608), seg(804, -804),
]);
