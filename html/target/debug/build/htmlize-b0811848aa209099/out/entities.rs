/// A map of all valid HTML entities to their expansions.
///
/// The keys of the map are full entity byte strings, e.g. `b"&copy;"`, and the
/// values are their expansions, e.g. `b"©"`.
///
/// See the [WHATWG HTML spec][spec] for the canonical list of entities with
/// their codepoints and glyphs. The [entities.json][] file linked there is
/// used to generate this constant.
///
/// [spec]: https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references
/// [entities.json]: https://html.spec.whatwg.org/entities.json
///
/// Entity                         | Codepoints         | Glyph
/// -------------------------------|--------------------|------
/// `&AElig`                       | U+0000C6           | Æ
/// `&AElig;`                      | U+0000C6           | Æ
/// `&AMP`                         | U+000026           | &
/// `&AMP;`                        | U+000026           | &
/// `&Aacute`                      | U+0000C1           | Á
/// `&Aacute;`                     | U+0000C1           | Á
/// `&Abreve;`                     | U+000102           | Ă
/// `&Acirc`                       | U+0000C2           | Â
/// `&Acirc;`                      | U+0000C2           | Â
/// `&Acy;`                        | U+000410           | А
/// `&Afr;`                        | U+01D504           | 𝔄
/// `&Agrave`                      | U+0000C0           | À
/// `&Agrave;`                     | U+0000C0           | À
/// `&Alpha;`                      | U+000391           | Α
/// `&Amacr;`                      | U+000100           | Ā
/// `&And;`                        | U+002A53           | ⩓
/// `&Aogon;`                      | U+000104           | Ą
/// `&Aopf;`                       | U+01D538           | 𝔸
/// `&ApplyFunction;`              | U+002061           | ⁡
/// `&Aring`                       | U+0000C5           | Å
/// `&Aring;`                      | U+0000C5           | Å
/// `&Ascr;`                       | U+01D49C           | 𝒜
/// `&Assign;`                     | U+002254           | ≔
/// `&Atilde`                      | U+0000C3           | Ã
/// `&Atilde;`                     | U+0000C3           | Ã
/// `&Auml`                        | U+0000C4           | Ä
/// `&Auml;`                       | U+0000C4           | Ä
/// `&Backslash;`                  | U+002216           | ∖
/// `&Barv;`                       | U+002AE7           | ⫧
/// `&Barwed;`                     | U+002306           | ⌆
/// `&Bcy;`                        | U+000411           | Б
/// `&Because;`                    | U+002235           | ∵
/// `&Bernoullis;`                 | U+00212C           | ℬ
/// `&Beta;`                       | U+000392           | Β
/// `&Bfr;`                        | U+01D505           | 𝔅
/// `&Bopf;`                       | U+01D539           | 𝔹
/// `&Breve;`                      | U+0002D8           | ˘
/// `&Bscr;`                       | U+00212C           | ℬ
/// `&Bumpeq;`                     | U+00224E           | ≎
/// `&CHcy;`                       | U+000427           | Ч
/// `&COPY`                        | U+0000A9           | ©
/// `&COPY;`                       | U+0000A9           | ©
/// `&Cacute;`                     | U+000106           | Ć
/// `&Cap;`                        | U+0022D2           | ⋒
/// `&CapitalDifferentialD;`       | U+002145           | ⅅ
/// `&Cayleys;`                    | U+00212D           | ℭ
/// `&Ccaron;`                     | U+00010C           | Č
/// `&Ccedil`                      | U+0000C7           | Ç
/// `&Ccedil;`                     | U+0000C7           | Ç
/// `&Ccirc;`                      | U+000108           | Ĉ
/// `&Cconint;`                    | U+002230           | ∰
/// `&Cdot;`                       | U+00010A           | Ċ
/// `&Cedilla;`                    | U+0000B8           | ¸
/// `&CenterDot;`                  | U+0000B7           | ·
/// `&Cfr;`                        | U+00212D           | ℭ
/// `&Chi;`                        | U+0003A7           | Χ
/// `&CircleDot;`                  | U+002299           | ⊙
/// `&CircleMinus;`                | U+002296           | ⊖
/// `&CirclePlus;`                 | U+002295           | ⊕
/// `&CircleTimes;`                | U+002297           | ⊗
/// `&ClockwiseContourIntegral;`   | U+002232           | ∲
/// `&CloseCurlyDoubleQuote;`      | U+00201D           | ”
/// `&CloseCurlyQuote;`            | U+002019           | ’
/// `&Colon;`                      | U+002237           | ∷
/// `&Colone;`                     | U+002A74           | ⩴
/// `&Congruent;`                  | U+002261           | ≡
/// `&Conint;`                     | U+00222F           | ∯
/// `&ContourIntegral;`            | U+00222E           | ∮
/// `&Copf;`                       | U+002102           | ℂ
/// `&Coproduct;`                  | U+002210           | ∐
/// `&CounterClockwiseContourIntegral;` | U+002233           | ∳
/// `&Cross;`                      | U+002A2F           | ⨯
/// `&Cscr;`                       | U+01D49E           | 𝒞
/// `&Cup;`                        | U+0022D3           | ⋓
/// `&CupCap;`                     | U+00224D           | ≍
/// `&DD;`                         | U+002145           | ⅅ
/// `&DDotrahd;`                   | U+002911           | ⤑
/// `&DJcy;`                       | U+000402           | Ђ
/// `&DScy;`                       | U+000405           | Ѕ
/// `&DZcy;`                       | U+00040F           | Џ
/// `&Dagger;`                     | U+002021           | ‡
/// `&Darr;`                       | U+0021A1           | ↡
/// `&Dashv;`                      | U+002AE4           | ⫤
/// `&Dcaron;`                     | U+00010E           | Ď
/// `&Dcy;`                        | U+000414           | Д
/// `&Del;`                        | U+002207           | ∇
/// `&Delta;`                      | U+000394           | Δ
/// `&Dfr;`                        | U+01D507           | 𝔇
/// `&DiacriticalAcute;`           | U+0000B4           | ´
/// `&DiacriticalDot;`             | U+0002D9           | ˙
/// `&DiacriticalDoubleAcute;`     | U+0002DD           | ˝
/// `&DiacriticalGrave;`           | U+000060           | \`
/// `&DiacriticalTilde;`           | U+0002DC           | ˜
/// `&Diamond;`                    | U+0022C4           | ⋄
/// `&DifferentialD;`              | U+002146           | ⅆ
/// `&Dopf;`                       | U+01D53B           | 𝔻
/// `&Dot;`                        | U+0000A8           | ¨
/// `&DotDot;`                     | U+0020DC           | ⃜
/// `&DotEqual;`                   | U+002250           | ≐
/// `&DoubleContourIntegral;`      | U+00222F           | ∯
/// `&DoubleDot;`                  | U+0000A8           | ¨
/// `&DoubleDownArrow;`            | U+0021D3           | ⇓
/// `&DoubleLeftArrow;`            | U+0021D0           | ⇐
/// `&DoubleLeftRightArrow;`       | U+0021D4           | ⇔
/// `&DoubleLeftTee;`              | U+002AE4           | ⫤
/// `&DoubleLongLeftArrow;`        | U+0027F8           | ⟸
/// `&DoubleLongLeftRightArrow;`   | U+0027FA           | ⟺
/// `&DoubleLongRightArrow;`       | U+0027F9           | ⟹
/// `&DoubleRightArrow;`           | U+0021D2           | ⇒
/// `&DoubleRightTee;`             | U+0022A8           | ⊨
/// `&DoubleUpArrow;`              | U+0021D1           | ⇑
/// `&DoubleUpDownArrow;`          | U+0021D5           | ⇕
/// `&DoubleVerticalBar;`          | U+002225           | ∥
/// `&DownArrow;`                  | U+002193           | ↓
/// `&DownArrowBar;`               | U+002913           | ⤓
/// `&DownArrowUpArrow;`           | U+0021F5           | ⇵
/// `&DownBreve;`                  | U+000311           | ̑
/// `&DownLeftRightVector;`        | U+002950           | ⥐
/// `&DownLeftTeeVector;`          | U+00295E           | ⥞
/// `&DownLeftVector;`             | U+0021BD           | ↽
/// `&DownLeftVectorBar;`          | U+002956           | ⥖
/// `&DownRightTeeVector;`         | U+00295F           | ⥟
/// `&DownRightVector;`            | U+0021C1           | ⇁
/// `&DownRightVectorBar;`         | U+002957           | ⥗
/// `&DownTee;`                    | U+0022A4           | ⊤
/// `&DownTeeArrow;`               | U+0021A7           | ↧
/// `&Downarrow;`                  | U+0021D3           | ⇓
/// `&Dscr;`                       | U+01D49F           | 𝒟
/// `&Dstrok;`                     | U+000110           | Đ
/// `&ENG;`                        | U+00014A           | Ŋ
/// `&ETH`                         | U+0000D0           | Ð
/// `&ETH;`                        | U+0000D0           | Ð
/// `&Eacute`                      | U+0000C9           | É
/// `&Eacute;`                     | U+0000C9           | É
/// `&Ecaron;`                     | U+00011A           | Ě
/// `&Ecirc`                       | U+0000CA           | Ê
/// `&Ecirc;`                      | U+0000CA           | Ê
/// `&Ecy;`                        | U+00042D           | Э
/// `&Edot;`                       | U+000116           | Ė
/// `&Efr;`                        | U+01D508           | 𝔈
/// `&Egrave`                      | U+0000C8           | È
/// `&Egrave;`                     | U+0000C8           | È
/// `&Element;`                    | U+002208           | ∈
/// `&Emacr;`                      | U+000112           | Ē
/// `&EmptySmallSquare;`           | U+0025FB           | ◻
/// `&EmptyVerySmallSquare;`       | U+0025AB           | ▫
/// `&Eogon;`                      | U+000118           | Ę
/// `&Eopf;`                       | U+01D53C           | 𝔼
/// `&Epsilon;`                    | U+000395           | Ε
/// `&Equal;`                      | U+002A75           | ⩵
/// `&EqualTilde;`                 | U+002242           | ≂
/// `&Equilibrium;`                | U+0021CC           | ⇌
/// `&Escr;`                       | U+002130           | ℰ
/// `&Esim;`                       | U+002A73           | ⩳
/// `&Eta;`                        | U+000397           | Η
/// `&Euml`                        | U+0000CB           | Ë
/// `&Euml;`                       | U+0000CB           | Ë
/// `&Exists;`                     | U+002203           | ∃
/// `&ExponentialE;`               | U+002147           | ⅇ
/// `&Fcy;`                        | U+000424           | Ф
/// `&Ffr;`                        | U+01D509           | 𝔉
/// `&FilledSmallSquare;`          | U+0025FC           | ◼
/// `&FilledVerySmallSquare;`      | U+0025AA           | ▪
/// `&Fopf;`                       | U+01D53D           | 𝔽
/// `&ForAll;`                     | U+002200           | ∀
/// `&Fouriertrf;`                 | U+002131           | ℱ
/// `&Fscr;`                       | U+002131           | ℱ
/// `&GJcy;`                       | U+000403           | Ѓ
/// `&GT`                          | U+00003E           | >
/// `&GT;`                         | U+00003E           | >
/// `&Gamma;`                      | U+000393           | Γ
/// `&Gammad;`                     | U+0003DC           | Ϝ
/// `&Gbreve;`                     | U+00011E           | Ğ
/// `&Gcedil;`                     | U+000122           | Ģ
/// `&Gcirc;`                      | U+00011C           | Ĝ
/// `&Gcy;`                        | U+000413           | Г
/// `&Gdot;`                       | U+000120           | Ġ
/// `&Gfr;`                        | U+01D50A           | 𝔊
/// `&Gg;`                         | U+0022D9           | ⋙
/// `&Gopf;`                       | U+01D53E           | 𝔾
/// `&GreaterEqual;`               | U+002265           | ≥
/// `&GreaterEqualLess;`           | U+0022DB           | ⋛
/// `&GreaterFullEqual;`           | U+002267           | ≧
/// `&GreaterGreater;`             | U+002AA2           | ⪢
/// `&GreaterLess;`                | U+002277           | ≷
/// `&GreaterSlantEqual;`          | U+002A7E           | ⩾
/// `&GreaterTilde;`               | U+002273           | ≳
/// `&Gscr;`                       | U+01D4A2           | 𝒢
/// `&Gt;`                         | U+00226B           | ≫
/// `&HARDcy;`                     | U+00042A           | Ъ
/// `&Hacek;`                      | U+0002C7           | ˇ
/// `&Hat;`                        | U+00005E           | ^
/// `&Hcirc;`                      | U+000124           | Ĥ
/// `&Hfr;`                        | U+00210C           | ℌ
/// `&HilbertSpace;`               | U+00210B           | ℋ
/// `&Hopf;`                       | U+00210D           | ℍ
/// `&HorizontalLine;`             | U+002500           | ─
/// `&Hscr;`                       | U+00210B           | ℋ
/// `&Hstrok;`                     | U+000126           | Ħ
/// `&HumpDownHump;`               | U+00224E           | ≎
/// `&HumpEqual;`                  | U+00224F           | ≏
/// `&IEcy;`                       | U+000415           | Е
/// `&IJlig;`                      | U+000132           | Ĳ
/// `&IOcy;`                       | U+000401           | Ё
/// `&Iacute`                      | U+0000CD           | Í
/// `&Iacute;`                     | U+0000CD           | Í
/// `&Icirc`                       | U+0000CE           | Î
/// `&Icirc;`                      | U+0000CE           | Î
/// `&Icy;`                        | U+000418           | И
/// `&Idot;`                       | U+000130           | İ
/// `&Ifr;`                        | U+002111           | ℑ
/// `&Igrave`                      | U+0000CC           | Ì
/// `&Igrave;`                     | U+0000CC           | Ì
/// `&Im;`                         | U+002111           | ℑ
/// `&Imacr;`                      | U+00012A           | Ī
/// `&ImaginaryI;`                 | U+002148           | ⅈ
/// `&Implies;`                    | U+0021D2           | ⇒
/// `&Int;`                        | U+00222C           | ∬
/// `&Integral;`                   | U+00222B           | ∫
/// `&Intersection;`               | U+0022C2           | ⋂
/// `&InvisibleComma;`             | U+002063           | ⁣
/// `&InvisibleTimes;`             | U+002062           | ⁢
/// `&Iogon;`                      | U+00012E           | Į
/// `&Iopf;`                       | U+01D540           | 𝕀
/// `&Iota;`                       | U+000399           | Ι
/// `&Iscr;`                       | U+002110           | ℐ
/// `&Itilde;`                     | U+000128           | Ĩ
/// `&Iukcy;`                      | U+000406           | І
/// `&Iuml`                        | U+0000CF           | Ï
/// `&Iuml;`                       | U+0000CF           | Ï
/// `&Jcirc;`                      | U+000134           | Ĵ
/// `&Jcy;`                        | U+000419           | Й
/// `&Jfr;`                        | U+01D50D           | 𝔍
/// `&Jopf;`                       | U+01D541           | 𝕁
/// `&Jscr;`                       | U+01D4A5           | 𝒥
/// `&Jsercy;`                     | U+000408           | Ј
/// `&Jukcy;`                      | U+000404           | Є
/// `&KHcy;`                       | U+000425           | Х
/// `&KJcy;`                       | U+00040C           | Ќ
/// `&Kappa;`                      | U+00039A           | Κ
/// `&Kcedil;`                     | U+000136           | Ķ
/// `&Kcy;`                        | U+00041A           | К
/// `&Kfr;`                        | U+01D50E           | 𝔎
/// `&Kopf;`                       | U+01D542           | 𝕂
/// `&Kscr;`                       | U+01D4A6           | 𝒦
/// `&LJcy;`                       | U+000409           | Љ
/// `&LT`                          | U+00003C           | <
/// `&LT;`                         | U+00003C           | <
/// `&Lacute;`                     | U+000139           | Ĺ
/// `&Lambda;`                     | U+00039B           | Λ
/// `&Lang;`                       | U+0027EA           | ⟪
/// `&Laplacetrf;`                 | U+002112           | ℒ
/// `&Larr;`                       | U+00219E           | ↞
/// `&Lcaron;`                     | U+00013D           | Ľ
/// `&Lcedil;`                     | U+00013B           | Ļ
/// `&Lcy;`                        | U+00041B           | Л
/// `&LeftAngleBracket;`           | U+0027E8           | ⟨
/// `&LeftArrow;`                  | U+002190           | ←
/// `&LeftArrowBar;`               | U+0021E4           | ⇤
/// `&LeftArrowRightArrow;`        | U+0021C6           | ⇆
/// `&LeftCeiling;`                | U+002308           | ⌈
/// `&LeftDoubleBracket;`          | U+0027E6           | ⟦
/// `&LeftDownTeeVector;`          | U+002961           | ⥡
/// `&LeftDownVector;`             | U+0021C3           | ⇃
/// `&LeftDownVectorBar;`          | U+002959           | ⥙
/// `&LeftFloor;`                  | U+00230A           | ⌊
/// `&LeftRightArrow;`             | U+002194           | ↔
/// `&LeftRightVector;`            | U+00294E           | ⥎
/// `&LeftTee;`                    | U+0022A3           | ⊣
/// `&LeftTeeArrow;`               | U+0021A4           | ↤
/// `&LeftTeeVector;`              | U+00295A           | ⥚
/// `&LeftTriangle;`               | U+0022B2           | ⊲
/// `&LeftTriangleBar;`            | U+0029CF           | ⧏
/// `&LeftTriangleEqual;`          | U+0022B4           | ⊴
/// `&LeftUpDownVector;`           | U+002951           | ⥑
/// `&LeftUpTeeVector;`            | U+002960           | ⥠
/// `&LeftUpVector;`               | U+0021BF           | ↿
/// `&LeftUpVectorBar;`            | U+002958           | ⥘
/// `&LeftVector;`                 | U+0021BC           | ↼
/// `&LeftVectorBar;`              | U+002952           | ⥒
/// `&Leftarrow;`                  | U+0021D0           | ⇐
/// `&Leftrightarrow;`             | U+0021D4           | ⇔
/// `&LessEqualGreater;`           | U+0022DA           | ⋚
/// `&LessFullEqual;`              | U+002266           | ≦
/// `&LessGreater;`                | U+002276           | ≶
/// `&LessLess;`                   | U+002AA1           | ⪡
/// `&LessSlantEqual;`             | U+002A7D           | ⩽
/// `&LessTilde;`                  | U+002272           | ≲
/// `&Lfr;`                        | U+01D50F           | 𝔏
/// `&Ll;`                         | U+0022D8           | ⋘
/// `&Lleftarrow;`                 | U+0021DA           | ⇚
/// `&Lmidot;`                     | U+00013F           | Ŀ
/// `&LongLeftArrow;`              | U+0027F5           | ⟵
/// `&LongLeftRightArrow;`         | U+0027F7           | ⟷
/// `&LongRightArrow;`             | U+0027F6           | ⟶
/// `&Longleftarrow;`              | U+0027F8           | ⟸
/// `&Longleftrightarrow;`         | U+0027FA           | ⟺
/// `&Longrightarrow;`             | U+0027F9           | ⟹
/// `&Lopf;`                       | U+01D543           | 𝕃
/// `&LowerLeftArrow;`             | U+002199           | ↙
/// `&LowerRightArrow;`            | U+002198           | ↘
/// `&Lscr;`                       | U+002112           | ℒ
/// `&Lsh;`                        | U+0021B0           | ↰
/// `&Lstrok;`                     | U+000141           | Ł
/// `&Lt;`                         | U+00226A           | ≪
/// `&Map;`                        | U+002905           | ⤅
/// `&Mcy;`                        | U+00041C           | М
/// `&MediumSpace;`                | U+00205F           |  
/// `&Mellintrf;`                  | U+002133           | ℳ
/// `&Mfr;`                        | U+01D510           | 𝔐
/// `&MinusPlus;`                  | U+002213           | ∓
/// `&Mopf;`                       | U+01D544           | 𝕄
/// `&Mscr;`                       | U+002133           | ℳ
/// `&Mu;`                         | U+00039C           | Μ
/// `&NJcy;`                       | U+00040A           | Њ
/// `&Nacute;`                     | U+000143           | Ń
/// `&Ncaron;`                     | U+000147           | Ň
/// `&Ncedil;`                     | U+000145           | Ņ
/// `&Ncy;`                        | U+00041D           | Н
/// `&NegativeMediumSpace;`        | U+00200B           | ​
/// `&NegativeThickSpace;`         | U+00200B           | ​
/// `&NegativeThinSpace;`          | U+00200B           | ​
/// `&NegativeVeryThinSpace;`      | U+00200B           | ​
/// `&NestedGreaterGreater;`       | U+00226B           | ≫
/// `&NestedLessLess;`             | U+00226A           | ≪
/// `&NewLine;`                    | U+00000A           | 
/// `&Nfr;`                        | U+01D511           | 𝔑
/// `&NoBreak;`                    | U+002060           | ⁠
/// `&NonBreakingSpace;`           | U+0000A0           |  
/// `&Nopf;`                       | U+002115           | ℕ
/// `&Not;`                        | U+002AEC           | ⫬
/// `&NotCongruent;`               | U+002262           | ≢
/// `&NotCupCap;`                  | U+00226D           | ≭
/// `&NotDoubleVerticalBar;`       | U+002226           | ∦
/// `&NotElement;`                 | U+002209           | ∉
/// `&NotEqual;`                   | U+002260           | ≠
/// `&NotEqualTilde;`              | U+002242, U+000338 | ≂̸
/// `&NotExists;`                  | U+002204           | ∄
/// `&NotGreater;`                 | U+00226F           | ≯
/// `&NotGreaterEqual;`            | U+002271           | ≱
/// `&NotGreaterFullEqual;`        | U+002267, U+000338 | ≧̸
/// `&NotGreaterGreater;`          | U+00226B, U+000338 | ≫̸
/// `&NotGreaterLess;`             | U+002279           | ≹
/// `&NotGreaterSlantEqual;`       | U+002A7E, U+000338 | ⩾̸
/// `&NotGreaterTilde;`            | U+002275           | ≵
/// `&NotHumpDownHump;`            | U+00224E, U+000338 | ≎̸
/// `&NotHumpEqual;`               | U+00224F, U+000338 | ≏̸
/// `&NotLeftTriangle;`            | U+0022EA           | ⋪
/// `&NotLeftTriangleBar;`         | U+0029CF, U+000338 | ⧏̸
/// `&NotLeftTriangleEqual;`       | U+0022EC           | ⋬
/// `&NotLess;`                    | U+00226E           | ≮
/// `&NotLessEqual;`               | U+002270           | ≰
/// `&NotLessGreater;`             | U+002278           | ≸
/// `&NotLessLess;`                | U+00226A, U+000338 | ≪̸
/// `&NotLessSlantEqual;`          | U+002A7D, U+000338 | ⩽̸
/// `&NotLessTilde;`               | U+002274           | ≴
/// `&NotNestedGreaterGreater;`    | U+002AA2, U+000338 | ⪢̸
/// `&NotNestedLessLess;`          | U+002AA1, U+000338 | ⪡̸
/// `&NotPrecedes;`                | U+002280           | ⊀
/// `&NotPrecedesEqual;`           | U+002AAF, U+000338 | ⪯̸
/// `&NotPrecedesSlantEqual;`      | U+0022E0           | ⋠
/// `&NotReverseElement;`          | U+00220C           | ∌
/// `&NotRightTriangle;`           | U+0022EB           | ⋫
/// `&NotRightTriangleBar;`        | U+0029D0, U+000338 | ⧐̸
/// `&NotRightTriangleEqual;`      | U+0022ED           | ⋭
/// `&NotSquareSubset;`            | U+00228F, U+000338 | ⊏̸
/// `&NotSquareSubsetEqual;`       | U+0022E2           | ⋢
/// `&NotSquareSuperset;`          | U+002290, U+000338 | ⊐̸
/// `&NotSquareSupersetEqual;`     | U+0022E3           | ⋣
/// `&NotSubset;`                  | U+002282, U+0020D2 | ⊂⃒
/// `&NotSubsetEqual;`             | U+002288           | ⊈
/// `&NotSucceeds;`                | U+002281           | ⊁
/// `&NotSucceedsEqual;`           | U+002AB0, U+000338 | ⪰̸
/// `&NotSucceedsSlantEqual;`      | U+0022E1           | ⋡
/// `&NotSucceedsTilde;`           | U+00227F, U+000338 | ≿̸
/// `&NotSuperset;`                | U+002283, U+0020D2 | ⊃⃒
/// `&NotSupersetEqual;`           | U+002289           | ⊉
/// `&NotTilde;`                   | U+002241           | ≁
/// `&NotTildeEqual;`              | U+002244           | ≄
/// `&NotTildeFullEqual;`          | U+002247           | ≇
/// `&NotTildeTilde;`              | U+002249           | ≉
/// `&NotVerticalBar;`             | U+002224           | ∤
/// `&Nscr;`                       | U+01D4A9           | 𝒩
/// `&Ntilde`                      | U+0000D1           | Ñ
/// `&Ntilde;`                     | U+0000D1           | Ñ
/// `&Nu;`                         | U+00039D           | Ν
/// `&OElig;`                      | U+000152           | Œ
/// `&Oacute`                      | U+0000D3           | Ó
/// `&Oacute;`                     | U+0000D3           | Ó
/// `&Ocirc`                       | U+0000D4           | Ô
/// `&Ocirc;`                      | U+0000D4           | Ô
/// `&Ocy;`                        | U+00041E           | О
/// `&Odblac;`                     | U+000150           | Ő
/// `&Ofr;`                        | U+01D512           | 𝔒
/// `&Ograve`                      | U+0000D2           | Ò
/// `&Ograve;`                     | U+0000D2           | Ò
/// `&Omacr;`                      | U+00014C           | Ō
/// `&Omega;`                      | U+0003A9           | Ω
/// `&Omicron;`                    | U+00039F           | Ο
/// `&Oopf;`                       | U+01D546           | 𝕆
/// `&OpenCurlyDoubleQuote;`       | U+00201C           | “
/// `&OpenCurlyQuote;`             | U+002018           | ‘
/// `&Or;`                         | U+002A54           | ⩔
/// `&Oscr;`                       | U+01D4AA           | 𝒪
/// `&Oslash`                      | U+0000D8           | Ø
/// `&Oslash;`                     | U+0000D8           | Ø
/// `&Otilde`                      | U+0000D5           | Õ
/// `&Otilde;`                     | U+0000D5           | Õ
/// `&Otimes;`                     | U+002A37           | ⨷
/// `&Ouml`                        | U+0000D6           | Ö
/// `&Ouml;`                       | U+0000D6           | Ö
/// `&OverBar;`                    | U+00203E           | ‾
/// `&OverBrace;`                  | U+0023DE           | ⏞
/// `&OverBracket;`                | U+0023B4           | ⎴
/// `&OverParenthesis;`            | U+0023DC           | ⏜
/// `&PartialD;`                   | U+002202           | ∂
/// `&Pcy;`                        | U+00041F           | П
/// `&Pfr;`                        | U+01D513           | 𝔓
/// `&Phi;`                        | U+0003A6           | Φ
/// `&Pi;`                         | U+0003A0           | Π
/// `&PlusMinus;`                  | U+0000B1           | ±
/// `&Poincareplane;`              | U+00210C           | ℌ
/// `&Popf;`                       | U+002119           | ℙ
/// `&Pr;`                         | U+002ABB           | ⪻
/// `&Precedes;`                   | U+00227A           | ≺
/// `&PrecedesEqual;`              | U+002AAF           | ⪯
/// `&PrecedesSlantEqual;`         | U+00227C           | ≼
/// `&PrecedesTilde;`              | U+00227E           | ≾
/// `&Prime;`                      | U+002033           | ″
/// `&Product;`                    | U+00220F           | ∏
/// `&Proportion;`                 | U+002237           | ∷
/// `&Proportional;`               | U+00221D           | ∝
/// `&Pscr;`                       | U+01D4AB           | 𝒫
/// `&Psi;`                        | U+0003A8           | Ψ
/// `&QUOT`                        | U+000022           | "
/// `&QUOT;`                       | U+000022           | "
/// `&Qfr;`                        | U+01D514           | 𝔔
/// `&Qopf;`                       | U+00211A           | ℚ
/// `&Qscr;`                       | U+01D4AC           | 𝒬
/// `&RBarr;`                      | U+002910           | ⤐
/// `&REG`                         | U+0000AE           | ®
/// `&REG;`                        | U+0000AE           | ®
/// `&Racute;`                     | U+000154           | Ŕ
/// `&Rang;`                       | U+0027EB           | ⟫
/// `&Rarr;`                       | U+0021A0           | ↠
/// `&Rarrtl;`                     | U+002916           | ⤖
/// `&Rcaron;`                     | U+000158           | Ř
/// `&Rcedil;`                     | U+000156           | Ŗ
/// `&Rcy;`                        | U+000420           | Р
/// `&Re;`                         | U+00211C           | ℜ
/// `&ReverseElement;`             | U+00220B           | ∋
/// `&ReverseEquilibrium;`         | U+0021CB           | ⇋
/// `&ReverseUpEquilibrium;`       | U+00296F           | ⥯
/// `&Rfr;`                        | U+00211C           | ℜ
/// `&Rho;`                        | U+0003A1           | Ρ
/// `&RightAngleBracket;`          | U+0027E9           | ⟩
/// `&RightArrow;`                 | U+002192           | →
/// `&RightArrowBar;`              | U+0021E5           | ⇥
/// `&RightArrowLeftArrow;`        | U+0021C4           | ⇄
/// `&RightCeiling;`               | U+002309           | ⌉
/// `&RightDoubleBracket;`         | U+0027E7           | ⟧
/// `&RightDownTeeVector;`         | U+00295D           | ⥝
/// `&RightDownVector;`            | U+0021C2           | ⇂
/// `&RightDownVectorBar;`         | U+002955           | ⥕
/// `&RightFloor;`                 | U+00230B           | ⌋
/// `&RightTee;`                   | U+0022A2           | ⊢
/// `&RightTeeArrow;`              | U+0021A6           | ↦
/// `&RightTeeVector;`             | U+00295B           | ⥛
/// `&RightTriangle;`              | U+0022B3           | ⊳
/// `&RightTriangleBar;`           | U+0029D0           | ⧐
/// `&RightTriangleEqual;`         | U+0022B5           | ⊵
/// `&RightUpDownVector;`          | U+00294F           | ⥏
/// `&RightUpTeeVector;`           | U+00295C           | ⥜
/// `&RightUpVector;`              | U+0021BE           | ↾
/// `&RightUpVectorBar;`           | U+002954           | ⥔
/// `&RightVector;`                | U+0021C0           | ⇀
/// `&RightVectorBar;`             | U+002953           | ⥓
/// `&Rightarrow;`                 | U+0021D2           | ⇒
/// `&Ropf;`                       | U+00211D           | ℝ
/// `&RoundImplies;`               | U+002970           | ⥰
/// `&Rrightarrow;`                | U+0021DB           | ⇛
/// `&Rscr;`                       | U+00211B           | ℛ
/// `&Rsh;`                        | U+0021B1           | ↱
/// `&RuleDelayed;`                | U+0029F4           | ⧴
/// `&SHCHcy;`                     | U+000429           | Щ
/// `&SHcy;`                       | U+000428           | Ш
/// `&SOFTcy;`                     | U+00042C           | Ь
/// `&Sacute;`                     | U+00015A           | Ś
/// `&Sc;`                         | U+002ABC           | ⪼
/// `&Scaron;`                     | U+000160           | Š
/// `&Scedil;`                     | U+00015E           | Ş
/// `&Scirc;`                      | U+00015C           | Ŝ
/// `&Scy;`                        | U+000421           | С
/// `&Sfr;`                        | U+01D516           | 𝔖
/// `&ShortDownArrow;`             | U+002193           | ↓
/// `&ShortLeftArrow;`             | U+002190           | ←
/// `&ShortRightArrow;`            | U+002192           | →
/// `&ShortUpArrow;`               | U+002191           | ↑
/// `&Sigma;`                      | U+0003A3           | Σ
/// `&SmallCircle;`                | U+002218           | ∘
/// `&Sopf;`                       | U+01D54A           | 𝕊
/// `&Sqrt;`                       | U+00221A           | √
/// `&Square;`                     | U+0025A1           | □
/// `&SquareIntersection;`         | U+002293           | ⊓
/// `&SquareSubset;`               | U+00228F           | ⊏
/// `&SquareSubsetEqual;`          | U+002291           | ⊑
/// `&SquareSuperset;`             | U+002290           | ⊐
/// `&SquareSupersetEqual;`        | U+002292           | ⊒
/// `&SquareUnion;`                | U+002294           | ⊔
/// `&Sscr;`                       | U+01D4AE           | 𝒮
/// `&Star;`                       | U+0022C6           | ⋆
/// `&Sub;`                        | U+0022D0           | ⋐
/// `&Subset;`                     | U+0022D0           | ⋐
/// `&SubsetEqual;`                | U+002286           | ⊆
/// `&Succeeds;`                   | U+00227B           | ≻
/// `&SucceedsEqual;`              | U+002AB0           | ⪰
/// `&SucceedsSlantEqual;`         | U+00227D           | ≽
/// `&SucceedsTilde;`              | U+00227F           | ≿
/// `&SuchThat;`                   | U+00220B           | ∋
/// `&Sum;`                        | U+002211           | ∑
/// `&Sup;`                        | U+0022D1           | ⋑
/// `&Superset;`                   | U+002283           | ⊃
/// `&SupersetEqual;`              | U+002287           | ⊇
/// `&Supset;`                     | U+0022D1           | ⋑
/// `&THORN`                       | U+0000DE           | Þ
/// `&THORN;`                      | U+0000DE           | Þ
/// `&TRADE;`                      | U+002122           | ™
/// `&TSHcy;`                      | U+00040B           | Ћ
/// `&TScy;`                       | U+000426           | Ц
/// `&Tab;`                        | U+000009           | 
/// `&Tau;`                        | U+0003A4           | Τ
/// `&Tcaron;`                     | U+000164           | Ť
/// `&Tcedil;`                     | U+000162           | Ţ
/// `&Tcy;`                        | U+000422           | Т
/// `&Tfr;`                        | U+01D517           | 𝔗
/// `&Therefore;`                  | U+002234           | ∴
/// `&Theta;`                      | U+000398           | Θ
/// `&ThickSpace;`                 | U+00205F, U+00200A |   
/// `&ThinSpace;`                  | U+002009           |  
/// `&Tilde;`                      | U+00223C           | ∼
/// `&TildeEqual;`                 | U+002243           | ≃
/// `&TildeFullEqual;`             | U+002245           | ≅
/// `&TildeTilde;`                 | U+002248           | ≈
/// `&Topf;`                       | U+01D54B           | 𝕋
/// `&TripleDot;`                  | U+0020DB           | ⃛
/// `&Tscr;`                       | U+01D4AF           | 𝒯
/// `&Tstrok;`                     | U+000166           | Ŧ
/// `&Uacute`                      | U+0000DA           | Ú
/// `&Uacute;`                     | U+0000DA           | Ú
/// `&Uarr;`                       | U+00219F           | ↟
/// `&Uarrocir;`                   | U+002949           | ⥉
/// `&Ubrcy;`                      | U+00040E           | Ў
/// `&Ubreve;`                     | U+00016C           | Ŭ
/// `&Ucirc`                       | U+0000DB           | Û
/// `&Ucirc;`                      | U+0000DB           | Û
/// `&Ucy;`                        | U+000423           | У
/// `&Udblac;`                     | U+000170           | Ű
/// `&Ufr;`                        | U+01D518           | 𝔘
/// `&Ugrave`                      | U+0000D9           | Ù
/// `&Ugrave;`                     | U+0000D9           | Ù
/// `&Umacr;`                      | U+00016A           | Ū
/// `&UnderBar;`                   | U+00005F           | _
/// `&UnderBrace;`                 | U+0023DF           | ⏟
/// `&UnderBracket;`               | U+0023B5           | ⎵
/// `&UnderParenthesis;`           | U+0023DD           | ⏝
/// `&Union;`                      | U+0022C3           | ⋃
/// `&UnionPlus;`                  | U+00228E           | ⊎
/// `&Uogon;`                      | U+000172           | Ų
/// `&Uopf;`                       | U+01D54C           | 𝕌
/// `&UpArrow;`                    | U+002191           | ↑
/// `&UpArrowBar;`                 | U+002912           | ⤒
/// `&UpArrowDownArrow;`           | U+0021C5           | ⇅
/// `&UpDownArrow;`                | U+002195           | ↕
/// `&UpEquilibrium;`              | U+00296E           | ⥮
/// `&UpTee;`                      | U+0022A5           | ⊥
/// `&UpTeeArrow;`                 | U+0021A5           | ↥
/// `&Uparrow;`                    | U+0021D1           | ⇑
/// `&Updownarrow;`                | U+0021D5           | ⇕
/// `&UpperLeftArrow;`             | U+002196           | ↖
/// `&UpperRightArrow;`            | U+002197           | ↗
/// `&Upsi;`                       | U+0003D2           | ϒ
/// `&Upsilon;`                    | U+0003A5           | Υ
/// `&Uring;`                      | U+00016E           | Ů
/// `&Uscr;`                       | U+01D4B0           | 𝒰
/// `&Utilde;`                     | U+000168           | Ũ
/// `&Uuml`                        | U+0000DC           | Ü
/// `&Uuml;`                       | U+0000DC           | Ü
/// `&VDash;`                      | U+0022AB           | ⊫
/// `&Vbar;`                       | U+002AEB           | ⫫
/// `&Vcy;`                        | U+000412           | В
/// `&Vdash;`                      | U+0022A9           | ⊩
/// `&Vdashl;`                     | U+002AE6           | ⫦
/// `&Vee;`                        | U+0022C1           | ⋁
/// `&Verbar;`                     | U+002016           | ‖
/// `&Vert;`                       | U+002016           | ‖
/// `&VerticalBar;`                | U+002223           | ∣
/// `&VerticalLine;`               | U+00007C           | |
/// `&VerticalSeparator;`          | U+002758           | ❘
/// `&VerticalTilde;`              | U+002240           | ≀
/// `&VeryThinSpace;`              | U+00200A           |  
/// `&Vfr;`                        | U+01D519           | 𝔙
/// `&Vopf;`                       | U+01D54D           | 𝕍
/// `&Vscr;`                       | U+01D4B1           | 𝒱
/// `&Vvdash;`                     | U+0022AA           | ⊪
/// `&Wcirc;`                      | U+000174           | Ŵ
/// `&Wedge;`                      | U+0022C0           | ⋀
/// `&Wfr;`                        | U+01D51A           | 𝔚
/// `&Wopf;`                       | U+01D54E           | 𝕎
/// `&Wscr;`                       | U+01D4B2           | 𝒲
/// `&Xfr;`                        | U+01D51B           | 𝔛
/// `&Xi;`                         | U+00039E           | Ξ
/// `&Xopf;`                       | U+01D54F           | 𝕏
/// `&Xscr;`                       | U+01D4B3           | 𝒳
/// `&YAcy;`                       | U+00042F           | Я
/// `&YIcy;`                       | U+000407           | Ї
/// `&YUcy;`                       | U+00042E           | Ю
/// `&Yacute`                      | U+0000DD           | Ý
/// `&Yacute;`                     | U+0000DD           | Ý
/// `&Ycirc;`                      | U+000176           | Ŷ
/// `&Ycy;`                        | U+00042B           | Ы
/// `&Yfr;`                        | U+01D51C           | 𝔜
/// `&Yopf;`                       | U+01D550           | 𝕐
/// `&Yscr;`                       | U+01D4B4           | 𝒴
/// `&Yuml;`                       | U+000178           | Ÿ
/// `&ZHcy;`                       | U+000416           | Ж
/// `&Zacute;`                     | U+000179           | Ź
/// `&Zcaron;`                     | U+00017D           | Ž
/// `&Zcy;`                        | U+000417           | З
/// `&Zdot;`                       | U+00017B           | Ż
/// `&ZeroWidthSpace;`             | U+00200B           | ​
/// `&Zeta;`                       | U+000396           | Ζ
/// `&Zfr;`                        | U+002128           | ℨ
/// `&Zopf;`                       | U+002124           | ℤ
/// `&Zscr;`                       | U+01D4B5           | 𝒵
/// `&aacute`                      | U+0000E1           | á
/// `&aacute;`                     | U+0000E1           | á
/// `&abreve;`                     | U+000103           | ă
/// `&ac;`                         | U+00223E           | ∾
/// `&acE;`                        | U+00223E, U+000333 | ∾̳
/// `&acd;`                        | U+00223F           | ∿
/// `&acirc`                       | U+0000E2           | â
/// `&acirc;`                      | U+0000E2           | â
/// `&acute`                       | U+0000B4           | ´
/// `&acute;`                      | U+0000B4           | ´
/// `&acy;`                        | U+000430           | а
/// `&aelig`                       | U+0000E6           | æ
/// `&aelig;`                      | U+0000E6           | æ
/// `&af;`                         | U+002061           | ⁡
/// `&afr;`                        | U+01D51E           | 𝔞
/// `&agrave`                      | U+0000E0           | à
/// `&agrave;`                     | U+0000E0           | à
/// `&alefsym;`                    | U+002135           | ℵ
/// `&aleph;`                      | U+002135           | ℵ
/// `&alpha;`                      | U+0003B1           | α
/// `&amacr;`                      | U+000101           | ā
/// `&amalg;`                      | U+002A3F           | ⨿
/// `&amp`                         | U+000026           | &
/// `&amp;`                        | U+000026           | &
/// `&and;`                        | U+002227           | ∧
/// `&andand;`                     | U+002A55           | ⩕
/// `&andd;`                       | U+002A5C           | ⩜
/// `&andslope;`                   | U+002A58           | ⩘
/// `&andv;`                       | U+002A5A           | ⩚
/// `&ang;`                        | U+002220           | ∠
/// `&ange;`                       | U+0029A4           | ⦤
/// `&angle;`                      | U+002220           | ∠
/// `&angmsd;`                     | U+002221           | ∡
/// `&angmsdaa;`                   | U+0029A8           | ⦨
/// `&angmsdab;`                   | U+0029A9           | ⦩
/// `&angmsdac;`                   | U+0029AA           | ⦪
/// `&angmsdad;`                   | U+0029AB           | ⦫
/// `&angmsdae;`                   | U+0029AC           | ⦬
/// `&angmsdaf;`                   | U+0029AD           | ⦭
/// `&angmsdag;`                   | U+0029AE           | ⦮
/// `&angmsdah;`                   | U+0029AF           | ⦯
/// `&angrt;`                      | U+00221F           | ∟
/// `&angrtvb;`                    | U+0022BE           | ⊾
/// `&angrtvbd;`                   | U+00299D           | ⦝
/// `&angsph;`                     | U+002222           | ∢
/// `&angst;`                      | U+0000C5           | Å
/// `&angzarr;`                    | U+00237C           | ⍼
/// `&aogon;`                      | U+000105           | ą
/// `&aopf;`                       | U+01D552           | 𝕒
/// `&ap;`                         | U+002248           | ≈
/// `&apE;`                        | U+002A70           | ⩰
/// `&apacir;`                     | U+002A6F           | ⩯
/// `&ape;`                        | U+00224A           | ≊
/// `&apid;`                       | U+00224B           | ≋
/// `&apos;`                       | U+000027           | '
/// `&approx;`                     | U+002248           | ≈
/// `&approxeq;`                   | U+00224A           | ≊
/// `&aring`                       | U+0000E5           | å
/// `&aring;`                      | U+0000E5           | å
/// `&ascr;`                       | U+01D4B6           | 𝒶
/// `&ast;`                        | U+00002A           | *
/// `&asymp;`                      | U+002248           | ≈
/// `&asympeq;`                    | U+00224D           | ≍
/// `&atilde`                      | U+0000E3           | ã
/// `&atilde;`                     | U+0000E3           | ã
/// `&auml`                        | U+0000E4           | ä
/// `&auml;`                       | U+0000E4           | ä
/// `&awconint;`                   | U+002233           | ∳
/// `&awint;`                      | U+002A11           | ⨑
/// `&bNot;`                       | U+002AED           | ⫭
/// `&backcong;`                   | U+00224C           | ≌
/// `&backepsilon;`                | U+0003F6           | ϶
/// `&backprime;`                  | U+002035           | ‵
/// `&backsim;`                    | U+00223D           | ∽
/// `&backsimeq;`                  | U+0022CD           | ⋍
/// `&barvee;`                     | U+0022BD           | ⊽
/// `&barwed;`                     | U+002305           | ⌅
/// `&barwedge;`                   | U+002305           | ⌅
/// `&bbrk;`                       | U+0023B5           | ⎵
/// `&bbrktbrk;`                   | U+0023B6           | ⎶
/// `&bcong;`                      | U+00224C           | ≌
/// `&bcy;`                        | U+000431           | б
/// `&bdquo;`                      | U+00201E           | „
/// `&becaus;`                     | U+002235           | ∵
/// `&because;`                    | U+002235           | ∵
/// `&bemptyv;`                    | U+0029B0           | ⦰
/// `&bepsi;`                      | U+0003F6           | ϶
/// `&bernou;`                     | U+00212C           | ℬ
/// `&beta;`                       | U+0003B2           | β
/// `&beth;`                       | U+002136           | ℶ
/// `&between;`                    | U+00226C           | ≬
/// `&bfr;`                        | U+01D51F           | 𝔟
/// `&bigcap;`                     | U+0022C2           | ⋂
/// `&bigcirc;`                    | U+0025EF           | ◯
/// `&bigcup;`                     | U+0022C3           | ⋃
/// `&bigodot;`                    | U+002A00           | ⨀
/// `&bigoplus;`                   | U+002A01           | ⨁
/// `&bigotimes;`                  | U+002A02           | ⨂
/// `&bigsqcup;`                   | U+002A06           | ⨆
/// `&bigstar;`                    | U+002605           | ★
/// `&bigtriangledown;`            | U+0025BD           | ▽
/// `&bigtriangleup;`              | U+0025B3           | △
/// `&biguplus;`                   | U+002A04           | ⨄
/// `&bigvee;`                     | U+0022C1           | ⋁
/// `&bigwedge;`                   | U+0022C0           | ⋀
/// `&bkarow;`                     | U+00290D           | ⤍
/// `&blacklozenge;`               | U+0029EB           | ⧫
/// `&blacksquare;`                | U+0025AA           | ▪
/// `&blacktriangle;`              | U+0025B4           | ▴
/// `&blacktriangledown;`          | U+0025BE           | ▾
/// `&blacktriangleleft;`          | U+0025C2           | ◂
/// `&blacktriangleright;`         | U+0025B8           | ▸
/// `&blank;`                      | U+002423           | ␣
/// `&blk12;`                      | U+002592           | ▒
/// `&blk14;`                      | U+002591           | ░
/// `&blk34;`                      | U+002593           | ▓
/// `&block;`                      | U+002588           | █
/// `&bne;`                        | U+00003D, U+0020E5 | =⃥
/// `&bnequiv;`                    | U+002261, U+0020E5 | ≡⃥
/// `&bnot;`                       | U+002310           | ⌐
/// `&bopf;`                       | U+01D553           | 𝕓
/// `&bot;`                        | U+0022A5           | ⊥
/// `&bottom;`                     | U+0022A5           | ⊥
/// `&bowtie;`                     | U+0022C8           | ⋈
/// `&boxDL;`                      | U+002557           | ╗
/// `&boxDR;`                      | U+002554           | ╔
/// `&boxDl;`                      | U+002556           | ╖
/// `&boxDr;`                      | U+002553           | ╓
/// `&boxH;`                       | U+002550           | ═
/// `&boxHD;`                      | U+002566           | ╦
/// `&boxHU;`                      | U+002569           | ╩
/// `&boxHd;`                      | U+002564           | ╤
/// `&boxHu;`                      | U+002567           | ╧
/// `&boxUL;`                      | U+00255D           | ╝
/// `&boxUR;`                      | U+00255A           | ╚
/// `&boxUl;`                      | U+00255C           | ╜
/// `&boxUr;`                      | U+002559           | ╙
/// `&boxV;`                       | U+002551           | ║
/// `&boxVH;`                      | U+00256C           | ╬
/// `&boxVL;`                      | U+002563           | ╣
/// `&boxVR;`                      | U+002560           | ╠
/// `&boxVh;`                      | U+00256B           | ╫
/// `&boxVl;`                      | U+002562           | ╢
/// `&boxVr;`                      | U+00255F           | ╟
/// `&boxbox;`                     | U+0029C9           | ⧉
/// `&boxdL;`                      | U+002555           | ╕
/// `&boxdR;`                      | U+002552           | ╒
/// `&boxdl;`                      | U+002510           | ┐
/// `&boxdr;`                      | U+00250C           | ┌
/// `&boxh;`                       | U+002500           | ─
/// `&boxhD;`                      | U+002565           | ╥
/// `&boxhU;`                      | U+002568           | ╨
/// `&boxhd;`                      | U+00252C           | ┬
/// `&boxhu;`                      | U+002534           | ┴
/// `&boxminus;`                   | U+00229F           | ⊟
/// `&boxplus;`                    | U+00229E           | ⊞
/// `&boxtimes;`                   | U+0022A0           | ⊠
/// `&boxuL;`                      | U+00255B           | ╛
/// `&boxuR;`                      | U+002558           | ╘
/// `&boxul;`                      | U+002518           | ┘
/// `&boxur;`                      | U+002514           | └
/// `&boxv;`                       | U+002502           | │
/// `&boxvH;`                      | U+00256A           | ╪
/// `&boxvL;`                      | U+002561           | ╡
/// `&boxvR;`                      | U+00255E           | ╞
/// `&boxvh;`                      | U+00253C           | ┼
/// `&boxvl;`                      | U+002524           | ┤
/// `&boxvr;`                      | U+00251C           | ├
/// `&bprime;`                     | U+002035           | ‵
/// `&breve;`                      | U+0002D8           | ˘
/// `&brvbar`                      | U+0000A6           | ¦
/// `&brvbar;`                     | U+0000A6           | ¦
/// `&bscr;`                       | U+01D4B7           | 𝒷
/// `&bsemi;`                      | U+00204F           | ⁏
/// `&bsim;`                       | U+00223D           | ∽
/// `&bsime;`                      | U+0022CD           | ⋍
/// `&bsol;`                       | U+00005C           | \
/// `&bsolb;`                      | U+0029C5           | ⧅
/// `&bsolhsub;`                   | U+0027C8           | ⟈
/// `&bull;`                       | U+002022           | •
/// `&bullet;`                     | U+002022           | •
/// `&bump;`                       | U+00224E           | ≎
/// `&bumpE;`                      | U+002AAE           | ⪮
/// `&bumpe;`                      | U+00224F           | ≏
/// `&bumpeq;`                     | U+00224F           | ≏
/// `&cacute;`                     | U+000107           | ć
/// `&cap;`                        | U+002229           | ∩
/// `&capand;`                     | U+002A44           | ⩄
/// `&capbrcup;`                   | U+002A49           | ⩉
/// `&capcap;`                     | U+002A4B           | ⩋
/// `&capcup;`                     | U+002A47           | ⩇
/// `&capdot;`                     | U+002A40           | ⩀
/// `&caps;`                       | U+002229, U+00FE00 | ∩︀
/// `&caret;`                      | U+002041           | ⁁
/// `&caron;`                      | U+0002C7           | ˇ
/// `&ccaps;`                      | U+002A4D           | ⩍
/// `&ccaron;`                     | U+00010D           | č
/// `&ccedil`                      | U+0000E7           | ç
/// `&ccedil;`                     | U+0000E7           | ç
/// `&ccirc;`                      | U+000109           | ĉ
/// `&ccups;`                      | U+002A4C           | ⩌
/// `&ccupssm;`                    | U+002A50           | ⩐
/// `&cdot;`                       | U+00010B           | ċ
/// `&cedil`                       | U+0000B8           | ¸
/// `&cedil;`                      | U+0000B8           | ¸
/// `&cemptyv;`                    | U+0029B2           | ⦲
/// `&cent`                        | U+0000A2           | ¢
/// `&cent;`                       | U+0000A2           | ¢
/// `&centerdot;`                  | U+0000B7           | ·
/// `&cfr;`                        | U+01D520           | 𝔠
/// `&chcy;`                       | U+000447           | ч
/// `&check;`                      | U+002713           | ✓
/// `&checkmark;`                  | U+002713           | ✓
/// `&chi;`                        | U+0003C7           | χ
/// `&cir;`                        | U+0025CB           | ○
/// `&cirE;`                       | U+0029C3           | ⧃
/// `&circ;`                       | U+0002C6           | ˆ
/// `&circeq;`                     | U+002257           | ≗
/// `&circlearrowleft;`            | U+0021BA           | ↺
/// `&circlearrowright;`           | U+0021BB           | ↻
/// `&circledR;`                   | U+0000AE           | ®
/// `&circledS;`                   | U+0024C8           | Ⓢ
/// `&circledast;`                 | U+00229B           | ⊛
/// `&circledcirc;`                | U+00229A           | ⊚
/// `&circleddash;`                | U+00229D           | ⊝
/// `&cire;`                       | U+002257           | ≗
/// `&cirfnint;`                   | U+002A10           | ⨐
/// `&cirmid;`                     | U+002AEF           | ⫯
/// `&cirscir;`                    | U+0029C2           | ⧂
/// `&clubs;`                      | U+002663           | ♣
/// `&clubsuit;`                   | U+002663           | ♣
/// `&colon;`                      | U+00003A           | :
/// `&colone;`                     | U+002254           | ≔
/// `&coloneq;`                    | U+002254           | ≔
/// `&comma;`                      | U+00002C           | ,
/// `&commat;`                     | U+000040           | @
/// `&comp;`                       | U+002201           | ∁
/// `&compfn;`                     | U+002218           | ∘
/// `&complement;`                 | U+002201           | ∁
/// `&complexes;`                  | U+002102           | ℂ
/// `&cong;`                       | U+002245           | ≅
/// `&congdot;`                    | U+002A6D           | ⩭
/// `&conint;`                     | U+00222E           | ∮
/// `&copf;`                       | U+01D554           | 𝕔
/// `&coprod;`                     | U+002210           | ∐
/// `&copy`                        | U+0000A9           | ©
/// `&copy;`                       | U+0000A9           | ©
/// `&copysr;`                     | U+002117           | ℗
/// `&crarr;`                      | U+0021B5           | ↵
/// `&cross;`                      | U+002717           | ✗
/// `&cscr;`                       | U+01D4B8           | 𝒸
/// `&csub;`                       | U+002ACF           | ⫏
/// `&csube;`                      | U+002AD1           | ⫑
/// `&csup;`                       | U+002AD0           | ⫐
/// `&csupe;`                      | U+002AD2           | ⫒
/// `&ctdot;`                      | U+0022EF           | ⋯
/// `&cudarrl;`                    | U+002938           | ⤸
/// `&cudarrr;`                    | U+002935           | ⤵
/// `&cuepr;`                      | U+0022DE           | ⋞
/// `&cuesc;`                      | U+0022DF           | ⋟
/// `&cularr;`                     | U+0021B6           | ↶
/// `&cularrp;`                    | U+00293D           | ⤽
/// `&cup;`                        | U+00222A           | ∪
/// `&cupbrcap;`                   | U+002A48           | ⩈
/// `&cupcap;`                     | U+002A46           | ⩆
/// `&cupcup;`                     | U+002A4A           | ⩊
/// `&cupdot;`                     | U+00228D           | ⊍
/// `&cupor;`                      | U+002A45           | ⩅
/// `&cups;`                       | U+00222A, U+00FE00 | ∪︀
/// `&curarr;`                     | U+0021B7           | ↷
/// `&curarrm;`                    | U+00293C           | ⤼
/// `&curlyeqprec;`                | U+0022DE           | ⋞
/// `&curlyeqsucc;`                | U+0022DF           | ⋟
/// `&curlyvee;`                   | U+0022CE           | ⋎
/// `&curlywedge;`                 | U+0022CF           | ⋏
/// `&curren`                      | U+0000A4           | ¤
/// `&curren;`                     | U+0000A4           | ¤
/// `&curvearrowleft;`             | U+0021B6           | ↶
/// `&curvearrowright;`            | U+0021B7           | ↷
/// `&cuvee;`                      | U+0022CE           | ⋎
/// `&cuwed;`                      | U+0022CF           | ⋏
/// `&cwconint;`                   | U+002232           | ∲
/// `&cwint;`                      | U+002231           | ∱
/// `&cylcty;`                     | U+00232D           | ⌭
/// `&dArr;`                       | U+0021D3           | ⇓
/// `&dHar;`                       | U+002965           | ⥥
/// `&dagger;`                     | U+002020           | †
/// `&daleth;`                     | U+002138           | ℸ
/// `&darr;`                       | U+002193           | ↓
/// `&dash;`                       | U+002010           | ‐
/// `&dashv;`                      | U+0022A3           | ⊣
/// `&dbkarow;`                    | U+00290F           | ⤏
/// `&dblac;`                      | U+0002DD           | ˝
/// `&dcaron;`                     | U+00010F           | ď
/// `&dcy;`                        | U+000434           | д
/// `&dd;`                         | U+002146           | ⅆ
/// `&ddagger;`                    | U+002021           | ‡
/// `&ddarr;`                      | U+0021CA           | ⇊
/// `&ddotseq;`                    | U+002A77           | ⩷
/// `&deg`                         | U+0000B0           | °
/// `&deg;`                        | U+0000B0           | °
/// `&delta;`                      | U+0003B4           | δ
/// `&demptyv;`                    | U+0029B1           | ⦱
/// `&dfisht;`                     | U+00297F           | ⥿
/// `&dfr;`                        | U+01D521           | 𝔡
/// `&dharl;`                      | U+0021C3           | ⇃
/// `&dharr;`                      | U+0021C2           | ⇂
/// `&diam;`                       | U+0022C4           | ⋄
/// `&diamond;`                    | U+0022C4           | ⋄
/// `&diamondsuit;`                | U+002666           | ♦
/// `&diams;`                      | U+002666           | ♦
/// `&die;`                        | U+0000A8           | ¨
/// `&digamma;`                    | U+0003DD           | ϝ
/// `&disin;`                      | U+0022F2           | ⋲
/// `&div;`                        | U+0000F7           | ÷
/// `&divide`                      | U+0000F7           | ÷
/// `&divide;`                     | U+0000F7           | ÷
/// `&divideontimes;`              | U+0022C7           | ⋇
/// `&divonx;`                     | U+0022C7           | ⋇
/// `&djcy;`                       | U+000452           | ђ
/// `&dlcorn;`                     | U+00231E           | ⌞
/// `&dlcrop;`                     | U+00230D           | ⌍
/// `&dollar;`                     | U+000024           | $
/// `&dopf;`                       | U+01D555           | 𝕕
/// `&dot;`                        | U+0002D9           | ˙
/// `&doteq;`                      | U+002250           | ≐
/// `&doteqdot;`                   | U+002251           | ≑
/// `&dotminus;`                   | U+002238           | ∸
/// `&dotplus;`                    | U+002214           | ∔
/// `&dotsquare;`                  | U+0022A1           | ⊡
/// `&doublebarwedge;`             | U+002306           | ⌆
/// `&downarrow;`                  | U+002193           | ↓
/// `&downdownarrows;`             | U+0021CA           | ⇊
/// `&downharpoonleft;`            | U+0021C3           | ⇃
/// `&downharpoonright;`           | U+0021C2           | ⇂
/// `&drbkarow;`                   | U+002910           | ⤐
/// `&drcorn;`                     | U+00231F           | ⌟
/// `&drcrop;`                     | U+00230C           | ⌌
/// `&dscr;`                       | U+01D4B9           | 𝒹
/// `&dscy;`                       | U+000455           | ѕ
/// `&dsol;`                       | U+0029F6           | ⧶
/// `&dstrok;`                     | U+000111           | đ
/// `&dtdot;`                      | U+0022F1           | ⋱
/// `&dtri;`                       | U+0025BF           | ▿
/// `&dtrif;`                      | U+0025BE           | ▾
/// `&duarr;`                      | U+0021F5           | ⇵
/// `&duhar;`                      | U+00296F           | ⥯
/// `&dwangle;`                    | U+0029A6           | ⦦
/// `&dzcy;`                       | U+00045F           | џ
/// `&dzigrarr;`                   | U+0027FF           | ⟿
/// `&eDDot;`                      | U+002A77           | ⩷
/// `&eDot;`                       | U+002251           | ≑
/// `&eacute`                      | U+0000E9           | é
/// `&eacute;`                     | U+0000E9           | é
/// `&easter;`                     | U+002A6E           | ⩮
/// `&ecaron;`                     | U+00011B           | ě
/// `&ecir;`                       | U+002256           | ≖
/// `&ecirc`                       | U+0000EA           | ê
/// `&ecirc;`                      | U+0000EA           | ê
/// `&ecolon;`                     | U+002255           | ≕
/// `&ecy;`                        | U+00044D           | э
/// `&edot;`                       | U+000117           | ė
/// `&ee;`                         | U+002147           | ⅇ
/// `&efDot;`                      | U+002252           | ≒
/// `&efr;`                        | U+01D522           | 𝔢
/// `&eg;`                         | U+002A9A           | ⪚
/// `&egrave`                      | U+0000E8           | è
/// `&egrave;`                     | U+0000E8           | è
/// `&egs;`                        | U+002A96           | ⪖
/// `&egsdot;`                     | U+002A98           | ⪘
/// `&el;`                         | U+002A99           | ⪙
/// `&elinters;`                   | U+0023E7           | ⏧
/// `&ell;`                        | U+002113           | ℓ
/// `&els;`                        | U+002A95           | ⪕
/// `&elsdot;`                     | U+002A97           | ⪗
/// `&emacr;`                      | U+000113           | ē
/// `&empty;`                      | U+002205           | ∅
/// `&emptyset;`                   | U+002205           | ∅
/// `&emptyv;`                     | U+002205           | ∅
/// `&emsp13;`                     | U+002004           |  
/// `&emsp14;`                     | U+002005           |  
/// `&emsp;`                       | U+002003           |  
/// `&eng;`                        | U+00014B           | ŋ
/// `&ensp;`                       | U+002002           |  
/// `&eogon;`                      | U+000119           | ę
/// `&eopf;`                       | U+01D556           | 𝕖
/// `&epar;`                       | U+0022D5           | ⋕
/// `&eparsl;`                     | U+0029E3           | ⧣
/// `&eplus;`                      | U+002A71           | ⩱
/// `&epsi;`                       | U+0003B5           | ε
/// `&epsilon;`                    | U+0003B5           | ε
/// `&epsiv;`                      | U+0003F5           | ϵ
/// `&eqcirc;`                     | U+002256           | ≖
/// `&eqcolon;`                    | U+002255           | ≕
/// `&eqsim;`                      | U+002242           | ≂
/// `&eqslantgtr;`                 | U+002A96           | ⪖
/// `&eqslantless;`                | U+002A95           | ⪕
/// `&equals;`                     | U+00003D           | =
/// `&equest;`                     | U+00225F           | ≟
/// `&equiv;`                      | U+002261           | ≡
/// `&equivDD;`                    | U+002A78           | ⩸
/// `&eqvparsl;`                   | U+0029E5           | ⧥
/// `&erDot;`                      | U+002253           | ≓
/// `&erarr;`                      | U+002971           | ⥱
/// `&escr;`                       | U+00212F           | ℯ
/// `&esdot;`                      | U+002250           | ≐
/// `&esim;`                       | U+002242           | ≂
/// `&eta;`                        | U+0003B7           | η
/// `&eth`                         | U+0000F0           | ð
/// `&eth;`                        | U+0000F0           | ð
/// `&euml`                        | U+0000EB           | ë
/// `&euml;`                       | U+0000EB           | ë
/// `&euro;`                       | U+0020AC           | €
/// `&excl;`                       | U+000021           | !
/// `&exist;`                      | U+002203           | ∃
/// `&expectation;`                | U+002130           | ℰ
/// `&exponentiale;`               | U+002147           | ⅇ
/// `&fallingdotseq;`              | U+002252           | ≒
/// `&fcy;`                        | U+000444           | ф
/// `&female;`                     | U+002640           | ♀
/// `&ffilig;`                     | U+00FB03           | ﬃ
/// `&fflig;`                      | U+00FB00           | ﬀ
/// `&ffllig;`                     | U+00FB04           | ﬄ
/// `&ffr;`                        | U+01D523           | 𝔣
/// `&filig;`                      | U+00FB01           | ﬁ
/// `&fjlig;`                      | U+000066, U+00006A | fj
/// `&flat;`                       | U+00266D           | ♭
/// `&fllig;`                      | U+00FB02           | ﬂ
/// `&fltns;`                      | U+0025B1           | ▱
/// `&fnof;`                       | U+000192           | ƒ
/// `&fopf;`                       | U+01D557           | 𝕗
/// `&forall;`                     | U+002200           | ∀
/// `&fork;`                       | U+0022D4           | ⋔
/// `&forkv;`                      | U+002AD9           | ⫙
/// `&fpartint;`                   | U+002A0D           | ⨍
/// `&frac12`                      | U+0000BD           | ½
/// `&frac12;`                     | U+0000BD           | ½
/// `&frac13;`                     | U+002153           | ⅓
/// `&frac14`                      | U+0000BC           | ¼
/// `&frac14;`                     | U+0000BC           | ¼
/// `&frac15;`                     | U+002155           | ⅕
/// `&frac16;`                     | U+002159           | ⅙
/// `&frac18;`                     | U+00215B           | ⅛
/// `&frac23;`                     | U+002154           | ⅔
/// `&frac25;`                     | U+002156           | ⅖
/// `&frac34`                      | U+0000BE           | ¾
/// `&frac34;`                     | U+0000BE           | ¾
/// `&frac35;`                     | U+002157           | ⅗
/// `&frac38;`                     | U+00215C           | ⅜
/// `&frac45;`                     | U+002158           | ⅘
/// `&frac56;`                     | U+00215A           | ⅚
/// `&frac58;`                     | U+00215D           | ⅝
/// `&frac78;`                     | U+00215E           | ⅞
/// `&frasl;`                      | U+002044           | ⁄
/// `&frown;`                      | U+002322           | ⌢
/// `&fscr;`                       | U+01D4BB           | 𝒻
/// `&gE;`                         | U+002267           | ≧
/// `&gEl;`                        | U+002A8C           | ⪌
/// `&gacute;`                     | U+0001F5           | ǵ
/// `&gamma;`                      | U+0003B3           | γ
/// `&gammad;`                     | U+0003DD           | ϝ
/// `&gap;`                        | U+002A86           | ⪆
/// `&gbreve;`                     | U+00011F           | ğ
/// `&gcirc;`                      | U+00011D           | ĝ
/// `&gcy;`                        | U+000433           | г
/// `&gdot;`                       | U+000121           | ġ
/// `&ge;`                         | U+002265           | ≥
/// `&gel;`                        | U+0022DB           | ⋛
/// `&geq;`                        | U+002265           | ≥
/// `&geqq;`                       | U+002267           | ≧
/// `&geqslant;`                   | U+002A7E           | ⩾
/// `&ges;`                        | U+002A7E           | ⩾
/// `&gescc;`                      | U+002AA9           | ⪩
/// `&gesdot;`                     | U+002A80           | ⪀
/// `&gesdoto;`                    | U+002A82           | ⪂
/// `&gesdotol;`                   | U+002A84           | ⪄
/// `&gesl;`                       | U+0022DB, U+00FE00 | ⋛︀
/// `&gesles;`                     | U+002A94           | ⪔
/// `&gfr;`                        | U+01D524           | 𝔤
/// `&gg;`                         | U+00226B           | ≫
/// `&ggg;`                        | U+0022D9           | ⋙
/// `&gimel;`                      | U+002137           | ℷ
/// `&gjcy;`                       | U+000453           | ѓ
/// `&gl;`                         | U+002277           | ≷
/// `&glE;`                        | U+002A92           | ⪒
/// `&gla;`                        | U+002AA5           | ⪥
/// `&glj;`                        | U+002AA4           | ⪤
/// `&gnE;`                        | U+002269           | ≩
/// `&gnap;`                       | U+002A8A           | ⪊
/// `&gnapprox;`                   | U+002A8A           | ⪊
/// `&gne;`                        | U+002A88           | ⪈
/// `&gneq;`                       | U+002A88           | ⪈
/// `&gneqq;`                      | U+002269           | ≩
/// `&gnsim;`                      | U+0022E7           | ⋧
/// `&gopf;`                       | U+01D558           | 𝕘
/// `&grave;`                      | U+000060           | \`
/// `&gscr;`                       | U+00210A           | ℊ
/// `&gsim;`                       | U+002273           | ≳
/// `&gsime;`                      | U+002A8E           | ⪎
/// `&gsiml;`                      | U+002A90           | ⪐
/// `&gt`                          | U+00003E           | >
/// `&gt;`                         | U+00003E           | >
/// `&gtcc;`                       | U+002AA7           | ⪧
/// `&gtcir;`                      | U+002A7A           | ⩺
/// `&gtdot;`                      | U+0022D7           | ⋗
/// `&gtlPar;`                     | U+002995           | ⦕
/// `&gtquest;`                    | U+002A7C           | ⩼
/// `&gtrapprox;`                  | U+002A86           | ⪆
/// `&gtrarr;`                     | U+002978           | ⥸
/// `&gtrdot;`                     | U+0022D7           | ⋗
/// `&gtreqless;`                  | U+0022DB           | ⋛
/// `&gtreqqless;`                 | U+002A8C           | ⪌
/// `&gtrless;`                    | U+002277           | ≷
/// `&gtrsim;`                     | U+002273           | ≳
/// `&gvertneqq;`                  | U+002269, U+00FE00 | ≩︀
/// `&gvnE;`                       | U+002269, U+00FE00 | ≩︀
/// `&hArr;`                       | U+0021D4           | ⇔
/// `&hairsp;`                     | U+00200A           |  
/// `&half;`                       | U+0000BD           | ½
/// `&hamilt;`                     | U+00210B           | ℋ
/// `&hardcy;`                     | U+00044A           | ъ
/// `&harr;`                       | U+002194           | ↔
/// `&harrcir;`                    | U+002948           | ⥈
/// `&harrw;`                      | U+0021AD           | ↭
/// `&hbar;`                       | U+00210F           | ℏ
/// `&hcirc;`                      | U+000125           | ĥ
/// `&hearts;`                     | U+002665           | ♥
/// `&heartsuit;`                  | U+002665           | ♥
/// `&hellip;`                     | U+002026           | …
/// `&hercon;`                     | U+0022B9           | ⊹
/// `&hfr;`                        | U+01D525           | 𝔥
/// `&hksearow;`                   | U+002925           | ⤥
/// `&hkswarow;`                   | U+002926           | ⤦
/// `&hoarr;`                      | U+0021FF           | ⇿
/// `&homtht;`                     | U+00223B           | ∻
/// `&hookleftarrow;`              | U+0021A9           | ↩
/// `&hookrightarrow;`             | U+0021AA           | ↪
/// `&hopf;`                       | U+01D559           | 𝕙
/// `&horbar;`                     | U+002015           | ―
/// `&hscr;`                       | U+01D4BD           | 𝒽
/// `&hslash;`                     | U+00210F           | ℏ
/// `&hstrok;`                     | U+000127           | ħ
/// `&hybull;`                     | U+002043           | ⁃
/// `&hyphen;`                     | U+002010           | ‐
/// `&iacute`                      | U+0000ED           | í
/// `&iacute;`                     | U+0000ED           | í
/// `&ic;`                         | U+002063           | ⁣
/// `&icirc`                       | U+0000EE           | î
/// `&icirc;`                      | U+0000EE           | î
/// `&icy;`                        | U+000438           | и
/// `&iecy;`                       | U+000435           | е
/// `&iexcl`                       | U+0000A1           | ¡
/// `&iexcl;`                      | U+0000A1           | ¡
/// `&iff;`                        | U+0021D4           | ⇔
/// `&ifr;`                        | U+01D526           | 𝔦
/// `&igrave`                      | U+0000EC           | ì
/// `&igrave;`                     | U+0000EC           | ì
/// `&ii;`                         | U+002148           | ⅈ
/// `&iiiint;`                     | U+002A0C           | ⨌
/// `&iiint;`                      | U+00222D           | ∭
/// `&iinfin;`                     | U+0029DC           | ⧜
/// `&iiota;`                      | U+002129           | ℩
/// `&ijlig;`                      | U+000133           | ĳ
/// `&imacr;`                      | U+00012B           | ī
/// `&image;`                      | U+002111           | ℑ
/// `&imagline;`                   | U+002110           | ℐ
/// `&imagpart;`                   | U+002111           | ℑ
/// `&imath;`                      | U+000131           | ı
/// `&imof;`                       | U+0022B7           | ⊷
/// `&imped;`                      | U+0001B5           | Ƶ
/// `&in;`                         | U+002208           | ∈
/// `&incare;`                     | U+002105           | ℅
/// `&infin;`                      | U+00221E           | ∞
/// `&infintie;`                   | U+0029DD           | ⧝
/// `&inodot;`                     | U+000131           | ı
/// `&int;`                        | U+00222B           | ∫
/// `&intcal;`                     | U+0022BA           | ⊺
/// `&integers;`                   | U+002124           | ℤ
/// `&intercal;`                   | U+0022BA           | ⊺
/// `&intlarhk;`                   | U+002A17           | ⨗
/// `&intprod;`                    | U+002A3C           | ⨼
/// `&iocy;`                       | U+000451           | ё
/// `&iogon;`                      | U+00012F           | į
/// `&iopf;`                       | U+01D55A           | 𝕚
/// `&iota;`                       | U+0003B9           | ι
/// `&iprod;`                      | U+002A3C           | ⨼
/// `&iquest`                      | U+0000BF           | ¿
/// `&iquest;`                     | U+0000BF           | ¿
/// `&iscr;`                       | U+01D4BE           | 𝒾
/// `&isin;`                       | U+002208           | ∈
/// `&isinE;`                      | U+0022F9           | ⋹
/// `&isindot;`                    | U+0022F5           | ⋵
/// `&isins;`                      | U+0022F4           | ⋴
/// `&isinsv;`                     | U+0022F3           | ⋳
/// `&isinv;`                      | U+002208           | ∈
/// `&it;`                         | U+002062           | ⁢
/// `&itilde;`                     | U+000129           | ĩ
/// `&iukcy;`                      | U+000456           | і
/// `&iuml`                        | U+0000EF           | ï
/// `&iuml;`                       | U+0000EF           | ï
/// `&jcirc;`                      | U+000135           | ĵ
/// `&jcy;`                        | U+000439           | й
/// `&jfr;`                        | U+01D527           | 𝔧
/// `&jmath;`                      | U+000237           | ȷ
/// `&jopf;`                       | U+01D55B           | 𝕛
/// `&jscr;`                       | U+01D4BF           | 𝒿
/// `&jsercy;`                     | U+000458           | ј
/// `&jukcy;`                      | U+000454           | є
/// `&kappa;`                      | U+0003BA           | κ
/// `&kappav;`                     | U+0003F0           | ϰ
/// `&kcedil;`                     | U+000137           | ķ
/// `&kcy;`                        | U+00043A           | к
/// `&kfr;`                        | U+01D528           | 𝔨
/// `&kgreen;`                     | U+000138           | ĸ
/// `&khcy;`                       | U+000445           | х
/// `&kjcy;`                       | U+00045C           | ќ
/// `&kopf;`                       | U+01D55C           | 𝕜
/// `&kscr;`                       | U+01D4C0           | 𝓀
/// `&lAarr;`                      | U+0021DA           | ⇚
/// `&lArr;`                       | U+0021D0           | ⇐
/// `&lAtail;`                     | U+00291B           | ⤛
/// `&lBarr;`                      | U+00290E           | ⤎
/// `&lE;`                         | U+002266           | ≦
/// `&lEg;`                        | U+002A8B           | ⪋
/// `&lHar;`                       | U+002962           | ⥢
/// `&lacute;`                     | U+00013A           | ĺ
/// `&laemptyv;`                   | U+0029B4           | ⦴
/// `&lagran;`                     | U+002112           | ℒ
/// `&lambda;`                     | U+0003BB           | λ
/// `&lang;`                       | U+0027E8           | ⟨
/// `&langd;`                      | U+002991           | ⦑
/// `&langle;`                     | U+0027E8           | ⟨
/// `&lap;`                        | U+002A85           | ⪅
/// `&laquo`                       | U+0000AB           | «
/// `&laquo;`                      | U+0000AB           | «
/// `&larr;`                       | U+002190           | ←
/// `&larrb;`                      | U+0021E4           | ⇤
/// `&larrbfs;`                    | U+00291F           | ⤟
/// `&larrfs;`                     | U+00291D           | ⤝
/// `&larrhk;`                     | U+0021A9           | ↩
/// `&larrlp;`                     | U+0021AB           | ↫
/// `&larrpl;`                     | U+002939           | ⤹
/// `&larrsim;`                    | U+002973           | ⥳
/// `&larrtl;`                     | U+0021A2           | ↢
/// `&lat;`                        | U+002AAB           | ⪫
/// `&latail;`                     | U+002919           | ⤙
/// `&late;`                       | U+002AAD           | ⪭
/// `&lates;`                      | U+002AAD, U+00FE00 | ⪭︀
/// `&lbarr;`                      | U+00290C           | ⤌
/// `&lbbrk;`                      | U+002772           | ❲
/// `&lbrace;`                     | U+00007B           | {
/// `&lbrack;`                     | U+00005B           | [
/// `&lbrke;`                      | U+00298B           | ⦋
/// `&lbrksld;`                    | U+00298F           | ⦏
/// `&lbrkslu;`                    | U+00298D           | ⦍
/// `&lcaron;`                     | U+00013E           | ľ
/// `&lcedil;`                     | U+00013C           | ļ
/// `&lceil;`                      | U+002308           | ⌈
/// `&lcub;`                       | U+00007B           | {
/// `&lcy;`                        | U+00043B           | л
/// `&ldca;`                       | U+002936           | ⤶
/// `&ldquo;`                      | U+00201C           | “
/// `&ldquor;`                     | U+00201E           | „
/// `&ldrdhar;`                    | U+002967           | ⥧
/// `&ldrushar;`                   | U+00294B           | ⥋
/// `&ldsh;`                       | U+0021B2           | ↲
/// `&le;`                         | U+002264           | ≤
/// `&leftarrow;`                  | U+002190           | ←
/// `&leftarrowtail;`              | U+0021A2           | ↢
/// `&leftharpoondown;`            | U+0021BD           | ↽
/// `&leftharpoonup;`              | U+0021BC           | ↼
/// `&leftleftarrows;`             | U+0021C7           | ⇇
/// `&leftrightarrow;`             | U+002194           | ↔
/// `&leftrightarrows;`            | U+0021C6           | ⇆
/// `&leftrightharpoons;`          | U+0021CB           | ⇋
/// `&leftrightsquigarrow;`        | U+0021AD           | ↭
/// `&leftthreetimes;`             | U+0022CB           | ⋋
/// `&leg;`                        | U+0022DA           | ⋚
/// `&leq;`                        | U+002264           | ≤
/// `&leqq;`                       | U+002266           | ≦
/// `&leqslant;`                   | U+002A7D           | ⩽
/// `&les;`                        | U+002A7D           | ⩽
/// `&lescc;`                      | U+002AA8           | ⪨
/// `&lesdot;`                     | U+002A7F           | ⩿
/// `&lesdoto;`                    | U+002A81           | ⪁
/// `&lesdotor;`                   | U+002A83           | ⪃
/// `&lesg;`                       | U+0022DA, U+00FE00 | ⋚︀
/// `&lesges;`                     | U+002A93           | ⪓
/// `&lessapprox;`                 | U+002A85           | ⪅
/// `&lessdot;`                    | U+0022D6           | ⋖
/// `&lesseqgtr;`                  | U+0022DA           | ⋚
/// `&lesseqqgtr;`                 | U+002A8B           | ⪋
/// `&lessgtr;`                    | U+002276           | ≶
/// `&lesssim;`                    | U+002272           | ≲
/// `&lfisht;`                     | U+00297C           | ⥼
/// `&lfloor;`                     | U+00230A           | ⌊
/// `&lfr;`                        | U+01D529           | 𝔩
/// `&lg;`                         | U+002276           | ≶
/// `&lgE;`                        | U+002A91           | ⪑
/// `&lhard;`                      | U+0021BD           | ↽
/// `&lharu;`                      | U+0021BC           | ↼
/// `&lharul;`                     | U+00296A           | ⥪
/// `&lhblk;`                      | U+002584           | ▄
/// `&ljcy;`                       | U+000459           | љ
/// `&ll;`                         | U+00226A           | ≪
/// `&llarr;`                      | U+0021C7           | ⇇
/// `&llcorner;`                   | U+00231E           | ⌞
/// `&llhard;`                     | U+00296B           | ⥫
/// `&lltri;`                      | U+0025FA           | ◺
/// `&lmidot;`                     | U+000140           | ŀ
/// `&lmoust;`                     | U+0023B0           | ⎰
/// `&lmoustache;`                 | U+0023B0           | ⎰
/// `&lnE;`                        | U+002268           | ≨
/// `&lnap;`                       | U+002A89           | ⪉
/// `&lnapprox;`                   | U+002A89           | ⪉
/// `&lne;`                        | U+002A87           | ⪇
/// `&lneq;`                       | U+002A87           | ⪇
/// `&lneqq;`                      | U+002268           | ≨
/// `&lnsim;`                      | U+0022E6           | ⋦
/// `&loang;`                      | U+0027EC           | ⟬
/// `&loarr;`                      | U+0021FD           | ⇽
/// `&lobrk;`                      | U+0027E6           | ⟦
/// `&longleftarrow;`              | U+0027F5           | ⟵
/// `&longleftrightarrow;`         | U+0027F7           | ⟷
/// `&longmapsto;`                 | U+0027FC           | ⟼
/// `&longrightarrow;`             | U+0027F6           | ⟶
/// `&looparrowleft;`              | U+0021AB           | ↫
/// `&looparrowright;`             | U+0021AC           | ↬
/// `&lopar;`                      | U+002985           | ⦅
/// `&lopf;`                       | U+01D55D           | 𝕝
/// `&loplus;`                     | U+002A2D           | ⨭
/// `&lotimes;`                    | U+002A34           | ⨴
/// `&lowast;`                     | U+002217           | ∗
/// `&lowbar;`                     | U+00005F           | _
/// `&loz;`                        | U+0025CA           | ◊
/// `&lozenge;`                    | U+0025CA           | ◊
/// `&lozf;`                       | U+0029EB           | ⧫
/// `&lpar;`                       | U+000028           | (
/// `&lparlt;`                     | U+002993           | ⦓
/// `&lrarr;`                      | U+0021C6           | ⇆
/// `&lrcorner;`                   | U+00231F           | ⌟
/// `&lrhar;`                      | U+0021CB           | ⇋
/// `&lrhard;`                     | U+00296D           | ⥭
/// `&lrm;`                        | U+00200E           | ‎
/// `&lrtri;`                      | U+0022BF           | ⊿
/// `&lsaquo;`                     | U+002039           | ‹
/// `&lscr;`                       | U+01D4C1           | 𝓁
/// `&lsh;`                        | U+0021B0           | ↰
/// `&lsim;`                       | U+002272           | ≲
/// `&lsime;`                      | U+002A8D           | ⪍
/// `&lsimg;`                      | U+002A8F           | ⪏
/// `&lsqb;`                       | U+00005B           | [
/// `&lsquo;`                      | U+002018           | ‘
/// `&lsquor;`                     | U+00201A           | ‚
/// `&lstrok;`                     | U+000142           | ł
/// `&lt`                          | U+00003C           | <
/// `&lt;`                         | U+00003C           | <
/// `&ltcc;`                       | U+002AA6           | ⪦
/// `&ltcir;`                      | U+002A79           | ⩹
/// `&ltdot;`                      | U+0022D6           | ⋖
/// `&lthree;`                     | U+0022CB           | ⋋
/// `&ltimes;`                     | U+0022C9           | ⋉
/// `&ltlarr;`                     | U+002976           | ⥶
/// `&ltquest;`                    | U+002A7B           | ⩻
/// `&ltrPar;`                     | U+002996           | ⦖
/// `&ltri;`                       | U+0025C3           | ◃
/// `&ltrie;`                      | U+0022B4           | ⊴
/// `&ltrif;`                      | U+0025C2           | ◂
/// `&lurdshar;`                   | U+00294A           | ⥊
/// `&luruhar;`                    | U+002966           | ⥦
/// `&lvertneqq;`                  | U+002268, U+00FE00 | ≨︀
/// `&lvnE;`                       | U+002268, U+00FE00 | ≨︀
/// `&mDDot;`                      | U+00223A           | ∺
/// `&macr`                        | U+0000AF           | ¯
/// `&macr;`                       | U+0000AF           | ¯
/// `&male;`                       | U+002642           | ♂
/// `&malt;`                       | U+002720           | ✠
/// `&maltese;`                    | U+002720           | ✠
/// `&map;`                        | U+0021A6           | ↦
/// `&mapsto;`                     | U+0021A6           | ↦
/// `&mapstodown;`                 | U+0021A7           | ↧
/// `&mapstoleft;`                 | U+0021A4           | ↤
/// `&mapstoup;`                   | U+0021A5           | ↥
/// `&marker;`                     | U+0025AE           | ▮
/// `&mcomma;`                     | U+002A29           | ⨩
/// `&mcy;`                        | U+00043C           | м
/// `&mdash;`                      | U+002014           | —
/// `&measuredangle;`              | U+002221           | ∡
/// `&mfr;`                        | U+01D52A           | 𝔪
/// `&mho;`                        | U+002127           | ℧
/// `&micro`                       | U+0000B5           | µ
/// `&micro;`                      | U+0000B5           | µ
/// `&mid;`                        | U+002223           | ∣
/// `&midast;`                     | U+00002A           | *
/// `&midcir;`                     | U+002AF0           | ⫰
/// `&middot`                      | U+0000B7           | ·
/// `&middot;`                     | U+0000B7           | ·
/// `&minus;`                      | U+002212           | −
/// `&minusb;`                     | U+00229F           | ⊟
/// `&minusd;`                     | U+002238           | ∸
/// `&minusdu;`                    | U+002A2A           | ⨪
/// `&mlcp;`                       | U+002ADB           | ⫛
/// `&mldr;`                       | U+002026           | …
/// `&mnplus;`                     | U+002213           | ∓
/// `&models;`                     | U+0022A7           | ⊧
/// `&mopf;`                       | U+01D55E           | 𝕞
/// `&mp;`                         | U+002213           | ∓
/// `&mscr;`                       | U+01D4C2           | 𝓂
/// `&mstpos;`                     | U+00223E           | ∾
/// `&mu;`                         | U+0003BC           | μ
/// `&multimap;`                   | U+0022B8           | ⊸
/// `&mumap;`                      | U+0022B8           | ⊸
/// `&nGg;`                        | U+0022D9, U+000338 | ⋙̸
/// `&nGt;`                        | U+00226B, U+0020D2 | ≫⃒
/// `&nGtv;`                       | U+00226B, U+000338 | ≫̸
/// `&nLeftarrow;`                 | U+0021CD           | ⇍
/// `&nLeftrightarrow;`            | U+0021CE           | ⇎
/// `&nLl;`                        | U+0022D8, U+000338 | ⋘̸
/// `&nLt;`                        | U+00226A, U+0020D2 | ≪⃒
/// `&nLtv;`                       | U+00226A, U+000338 | ≪̸
/// `&nRightarrow;`                | U+0021CF           | ⇏
/// `&nVDash;`                     | U+0022AF           | ⊯
/// `&nVdash;`                     | U+0022AE           | ⊮
/// `&nabla;`                      | U+002207           | ∇
/// `&nacute;`                     | U+000144           | ń
/// `&nang;`                       | U+002220, U+0020D2 | ∠⃒
/// `&nap;`                        | U+002249           | ≉
/// `&napE;`                       | U+002A70, U+000338 | ⩰̸
/// `&napid;`                      | U+00224B, U+000338 | ≋̸
/// `&napos;`                      | U+000149           | ŉ
/// `&napprox;`                    | U+002249           | ≉
/// `&natur;`                      | U+00266E           | ♮
/// `&natural;`                    | U+00266E           | ♮
/// `&naturals;`                   | U+002115           | ℕ
/// `&nbsp`                        | U+0000A0           |  
/// `&nbsp;`                       | U+0000A0           |  
/// `&nbump;`                      | U+00224E, U+000338 | ≎̸
/// `&nbumpe;`                     | U+00224F, U+000338 | ≏̸
/// `&ncap;`                       | U+002A43           | ⩃
/// `&ncaron;`                     | U+000148           | ň
/// `&ncedil;`                     | U+000146           | ņ
/// `&ncong;`                      | U+002247           | ≇
/// `&ncongdot;`                   | U+002A6D, U+000338 | ⩭̸
/// `&ncup;`                       | U+002A42           | ⩂
/// `&ncy;`                        | U+00043D           | н
/// `&ndash;`                      | U+002013           | –
/// `&ne;`                         | U+002260           | ≠
/// `&neArr;`                      | U+0021D7           | ⇗
/// `&nearhk;`                     | U+002924           | ⤤
/// `&nearr;`                      | U+002197           | ↗
/// `&nearrow;`                    | U+002197           | ↗
/// `&nedot;`                      | U+002250, U+000338 | ≐̸
/// `&nequiv;`                     | U+002262           | ≢
/// `&nesear;`                     | U+002928           | ⤨
/// `&nesim;`                      | U+002242, U+000338 | ≂̸
/// `&nexist;`                     | U+002204           | ∄
/// `&nexists;`                    | U+002204           | ∄
/// `&nfr;`                        | U+01D52B           | 𝔫
/// `&ngE;`                        | U+002267, U+000338 | ≧̸
/// `&nge;`                        | U+002271           | ≱
/// `&ngeq;`                       | U+002271           | ≱
/// `&ngeqq;`                      | U+002267, U+000338 | ≧̸
/// `&ngeqslant;`                  | U+002A7E, U+000338 | ⩾̸
/// `&nges;`                       | U+002A7E, U+000338 | ⩾̸
/// `&ngsim;`                      | U+002275           | ≵
/// `&ngt;`                        | U+00226F           | ≯
/// `&ngtr;`                       | U+00226F           | ≯
/// `&nhArr;`                      | U+0021CE           | ⇎
/// `&nharr;`                      | U+0021AE           | ↮
/// `&nhpar;`                      | U+002AF2           | ⫲
/// `&ni;`                         | U+00220B           | ∋
/// `&nis;`                        | U+0022FC           | ⋼
/// `&nisd;`                       | U+0022FA           | ⋺
/// `&niv;`                        | U+00220B           | ∋
/// `&njcy;`                       | U+00045A           | њ
/// `&nlArr;`                      | U+0021CD           | ⇍
/// `&nlE;`                        | U+002266, U+000338 | ≦̸
/// `&nlarr;`                      | U+00219A           | ↚
/// `&nldr;`                       | U+002025           | ‥
/// `&nle;`                        | U+002270           | ≰
/// `&nleftarrow;`                 | U+00219A           | ↚
/// `&nleftrightarrow;`            | U+0021AE           | ↮
/// `&nleq;`                       | U+002270           | ≰
/// `&nleqq;`                      | U+002266, U+000338 | ≦̸
/// `&nleqslant;`                  | U+002A7D, U+000338 | ⩽̸
/// `&nles;`                       | U+002A7D, U+000338 | ⩽̸
/// `&nless;`                      | U+00226E           | ≮
/// `&nlsim;`                      | U+002274           | ≴
/// `&nlt;`                        | U+00226E           | ≮
/// `&nltri;`                      | U+0022EA           | ⋪
/// `&nltrie;`                     | U+0022EC           | ⋬
/// `&nmid;`                       | U+002224           | ∤
/// `&nopf;`                       | U+01D55F           | 𝕟
/// `&not`                         | U+0000AC           | ¬
/// `&not;`                        | U+0000AC           | ¬
/// `&notin;`                      | U+002209           | ∉
/// `&notinE;`                     | U+0022F9, U+000338 | ⋹̸
/// `&notindot;`                   | U+0022F5, U+000338 | ⋵̸
/// `&notinva;`                    | U+002209           | ∉
/// `&notinvb;`                    | U+0022F7           | ⋷
/// `&notinvc;`                    | U+0022F6           | ⋶
/// `&notni;`                      | U+00220C           | ∌
/// `&notniva;`                    | U+00220C           | ∌
/// `&notnivb;`                    | U+0022FE           | ⋾
/// `&notnivc;`                    | U+0022FD           | ⋽
/// `&npar;`                       | U+002226           | ∦
/// `&nparallel;`                  | U+002226           | ∦
/// `&nparsl;`                     | U+002AFD, U+0020E5 | ⫽⃥
/// `&npart;`                      | U+002202, U+000338 | ∂̸
/// `&npolint;`                    | U+002A14           | ⨔
/// `&npr;`                        | U+002280           | ⊀
/// `&nprcue;`                     | U+0022E0           | ⋠
/// `&npre;`                       | U+002AAF, U+000338 | ⪯̸
/// `&nprec;`                      | U+002280           | ⊀
/// `&npreceq;`                    | U+002AAF, U+000338 | ⪯̸
/// `&nrArr;`                      | U+0021CF           | ⇏
/// `&nrarr;`                      | U+00219B           | ↛
/// `&nrarrc;`                     | U+002933, U+000338 | ⤳̸
/// `&nrarrw;`                     | U+00219D, U+000338 | ↝̸
/// `&nrightarrow;`                | U+00219B           | ↛
/// `&nrtri;`                      | U+0022EB           | ⋫
/// `&nrtrie;`                     | U+0022ED           | ⋭
/// `&nsc;`                        | U+002281           | ⊁
/// `&nsccue;`                     | U+0022E1           | ⋡
/// `&nsce;`                       | U+002AB0, U+000338 | ⪰̸
/// `&nscr;`                       | U+01D4C3           | 𝓃
/// `&nshortmid;`                  | U+002224           | ∤
/// `&nshortparallel;`             | U+002226           | ∦
/// `&nsim;`                       | U+002241           | ≁
/// `&nsime;`                      | U+002244           | ≄
/// `&nsimeq;`                     | U+002244           | ≄
/// `&nsmid;`                      | U+002224           | ∤
/// `&nspar;`                      | U+002226           | ∦
/// `&nsqsube;`                    | U+0022E2           | ⋢
/// `&nsqsupe;`                    | U+0022E3           | ⋣
/// `&nsub;`                       | U+002284           | ⊄
/// `&nsubE;`                      | U+002AC5, U+000338 | ⫅̸
/// `&nsube;`                      | U+002288           | ⊈
/// `&nsubset;`                    | U+002282, U+0020D2 | ⊂⃒
/// `&nsubseteq;`                  | U+002288           | ⊈
/// `&nsubseteqq;`                 | U+002AC5, U+000338 | ⫅̸
/// `&nsucc;`                      | U+002281           | ⊁
/// `&nsucceq;`                    | U+002AB0, U+000338 | ⪰̸
/// `&nsup;`                       | U+002285           | ⊅
/// `&nsupE;`                      | U+002AC6, U+000338 | ⫆̸
/// `&nsupe;`                      | U+002289           | ⊉
/// `&nsupset;`                    | U+002283, U+0020D2 | ⊃⃒
/// `&nsupseteq;`                  | U+002289           | ⊉
/// `&nsupseteqq;`                 | U+002AC6, U+000338 | ⫆̸
/// `&ntgl;`                       | U+002279           | ≹
/// `&ntilde`                      | U+0000F1           | ñ
/// `&ntilde;`                     | U+0000F1           | ñ
/// `&ntlg;`                       | U+002278           | ≸
/// `&ntriangleleft;`              | U+0022EA           | ⋪
/// `&ntrianglelefteq;`            | U+0022EC           | ⋬
/// `&ntriangleright;`             | U+0022EB           | ⋫
/// `&ntrianglerighteq;`           | U+0022ED           | ⋭
/// `&nu;`                         | U+0003BD           | ν
/// `&num;`                        | U+000023           | #
/// `&numero;`                     | U+002116           | №
/// `&numsp;`                      | U+002007           |  
/// `&nvDash;`                     | U+0022AD           | ⊭
/// `&nvHarr;`                     | U+002904           | ⤄
/// `&nvap;`                       | U+00224D, U+0020D2 | ≍⃒
/// `&nvdash;`                     | U+0022AC           | ⊬
/// `&nvge;`                       | U+002265, U+0020D2 | ≥⃒
/// `&nvgt;`                       | U+00003E, U+0020D2 | >⃒
/// `&nvinfin;`                    | U+0029DE           | ⧞
/// `&nvlArr;`                     | U+002902           | ⤂
/// `&nvle;`                       | U+002264, U+0020D2 | ≤⃒
/// `&nvlt;`                       | U+00003C, U+0020D2 | <⃒
/// `&nvltrie;`                    | U+0022B4, U+0020D2 | ⊴⃒
/// `&nvrArr;`                     | U+002903           | ⤃
/// `&nvrtrie;`                    | U+0022B5, U+0020D2 | ⊵⃒
/// `&nvsim;`                      | U+00223C, U+0020D2 | ∼⃒
/// `&nwArr;`                      | U+0021D6           | ⇖
/// `&nwarhk;`                     | U+002923           | ⤣
/// `&nwarr;`                      | U+002196           | ↖
/// `&nwarrow;`                    | U+002196           | ↖
/// `&nwnear;`                     | U+002927           | ⤧
/// `&oS;`                         | U+0024C8           | Ⓢ
/// `&oacute`                      | U+0000F3           | ó
/// `&oacute;`                     | U+0000F3           | ó
/// `&oast;`                       | U+00229B           | ⊛
/// `&ocir;`                       | U+00229A           | ⊚
/// `&ocirc`                       | U+0000F4           | ô
/// `&ocirc;`                      | U+0000F4           | ô
/// `&ocy;`                        | U+00043E           | о
/// `&odash;`                      | U+00229D           | ⊝
/// `&odblac;`                     | U+000151           | ő
/// `&odiv;`                       | U+002A38           | ⨸
/// `&odot;`                       | U+002299           | ⊙
/// `&odsold;`                     | U+0029BC           | ⦼
/// `&oelig;`                      | U+000153           | œ
/// `&ofcir;`                      | U+0029BF           | ⦿
/// `&ofr;`                        | U+01D52C           | 𝔬
/// `&ogon;`                       | U+0002DB           | ˛
/// `&ograve`                      | U+0000F2           | ò
/// `&ograve;`                     | U+0000F2           | ò
/// `&ogt;`                        | U+0029C1           | ⧁
/// `&ohbar;`                      | U+0029B5           | ⦵
/// `&ohm;`                        | U+0003A9           | Ω
/// `&oint;`                       | U+00222E           | ∮
/// `&olarr;`                      | U+0021BA           | ↺
/// `&olcir;`                      | U+0029BE           | ⦾
/// `&olcross;`                    | U+0029BB           | ⦻
/// `&oline;`                      | U+00203E           | ‾
/// `&olt;`                        | U+0029C0           | ⧀
/// `&omacr;`                      | U+00014D           | ō
/// `&omega;`                      | U+0003C9           | ω
/// `&omicron;`                    | U+0003BF           | ο
/// `&omid;`                       | U+0029B6           | ⦶
/// `&ominus;`                     | U+002296           | ⊖
/// `&oopf;`                       | U+01D560           | 𝕠
/// `&opar;`                       | U+0029B7           | ⦷
/// `&operp;`                      | U+0029B9           | ⦹
/// `&oplus;`                      | U+002295           | ⊕
/// `&or;`                         | U+002228           | ∨
/// `&orarr;`                      | U+0021BB           | ↻
/// `&ord;`                        | U+002A5D           | ⩝
/// `&order;`                      | U+002134           | ℴ
/// `&orderof;`                    | U+002134           | ℴ
/// `&ordf`                        | U+0000AA           | ª
/// `&ordf;`                       | U+0000AA           | ª
/// `&ordm`                        | U+0000BA           | º
/// `&ordm;`                       | U+0000BA           | º
/// `&origof;`                     | U+0022B6           | ⊶
/// `&oror;`                       | U+002A56           | ⩖
/// `&orslope;`                    | U+002A57           | ⩗
/// `&orv;`                        | U+002A5B           | ⩛
/// `&oscr;`                       | U+002134           | ℴ
/// `&oslash`                      | U+0000F8           | ø
/// `&oslash;`                     | U+0000F8           | ø
/// `&osol;`                       | U+002298           | ⊘
/// `&otilde`                      | U+0000F5           | õ
/// `&otilde;`                     | U+0000F5           | õ
/// `&otimes;`                     | U+002297           | ⊗
/// `&otimesas;`                   | U+002A36           | ⨶
/// `&ouml`                        | U+0000F6           | ö
/// `&ouml;`                       | U+0000F6           | ö
/// `&ovbar;`                      | U+00233D           | ⌽
/// `&par;`                        | U+002225           | ∥
/// `&para`                        | U+0000B6           | ¶
/// `&para;`                       | U+0000B6           | ¶
/// `&parallel;`                   | U+002225           | ∥
/// `&parsim;`                     | U+002AF3           | ⫳
/// `&parsl;`                      | U+002AFD           | ⫽
/// `&part;`                       | U+002202           | ∂
/// `&pcy;`                        | U+00043F           | п
/// `&percnt;`                     | U+000025           | %
/// `&period;`                     | U+00002E           | .
/// `&permil;`                     | U+002030           | ‰
/// `&perp;`                       | U+0022A5           | ⊥
/// `&pertenk;`                    | U+002031           | ‱
/// `&pfr;`                        | U+01D52D           | 𝔭
/// `&phi;`                        | U+0003C6           | φ
/// `&phiv;`                       | U+0003D5           | ϕ
/// `&phmmat;`                     | U+002133           | ℳ
/// `&phone;`                      | U+00260E           | ☎
/// `&pi;`                         | U+0003C0           | π
/// `&pitchfork;`                  | U+0022D4           | ⋔
/// `&piv;`                        | U+0003D6           | ϖ
/// `&planck;`                     | U+00210F           | ℏ
/// `&planckh;`                    | U+00210E           | ℎ
/// `&plankv;`                     | U+00210F           | ℏ
/// `&plus;`                       | U+00002B           | +
/// `&plusacir;`                   | U+002A23           | ⨣
/// `&plusb;`                      | U+00229E           | ⊞
/// `&pluscir;`                    | U+002A22           | ⨢
/// `&plusdo;`                     | U+002214           | ∔
/// `&plusdu;`                     | U+002A25           | ⨥
/// `&pluse;`                      | U+002A72           | ⩲
/// `&plusmn`                      | U+0000B1           | ±
/// `&plusmn;`                     | U+0000B1           | ±
/// `&plussim;`                    | U+002A26           | ⨦
/// `&plustwo;`                    | U+002A27           | ⨧
/// `&pm;`                         | U+0000B1           | ±
/// `&pointint;`                   | U+002A15           | ⨕
/// `&popf;`                       | U+01D561           | 𝕡
/// `&pound`                       | U+0000A3           | £
/// `&pound;`                      | U+0000A3           | £
/// `&pr;`                         | U+00227A           | ≺
/// `&prE;`                        | U+002AB3           | ⪳
/// `&prap;`                       | U+002AB7           | ⪷
/// `&prcue;`                      | U+00227C           | ≼
/// `&pre;`                        | U+002AAF           | ⪯
/// `&prec;`                       | U+00227A           | ≺
/// `&precapprox;`                 | U+002AB7           | ⪷
/// `&preccurlyeq;`                | U+00227C           | ≼
/// `&preceq;`                     | U+002AAF           | ⪯
/// `&precnapprox;`                | U+002AB9           | ⪹
/// `&precneqq;`                   | U+002AB5           | ⪵
/// `&precnsim;`                   | U+0022E8           | ⋨
/// `&precsim;`                    | U+00227E           | ≾
/// `&prime;`                      | U+002032           | ′
/// `&primes;`                     | U+002119           | ℙ
/// `&prnE;`                       | U+002AB5           | ⪵
/// `&prnap;`                      | U+002AB9           | ⪹
/// `&prnsim;`                     | U+0022E8           | ⋨
/// `&prod;`                       | U+00220F           | ∏
/// `&profalar;`                   | U+00232E           | ⌮
/// `&profline;`                   | U+002312           | ⌒
/// `&profsurf;`                   | U+002313           | ⌓
/// `&prop;`                       | U+00221D           | ∝
/// `&propto;`                     | U+00221D           | ∝
/// `&prsim;`                      | U+00227E           | ≾
/// `&prurel;`                     | U+0022B0           | ⊰
/// `&pscr;`                       | U+01D4C5           | 𝓅
/// `&psi;`                        | U+0003C8           | ψ
/// `&puncsp;`                     | U+002008           |  
/// `&qfr;`                        | U+01D52E           | 𝔮
/// `&qint;`                       | U+002A0C           | ⨌
/// `&qopf;`                       | U+01D562           | 𝕢
/// `&qprime;`                     | U+002057           | ⁗
/// `&qscr;`                       | U+01D4C6           | 𝓆
/// `&quaternions;`                | U+00210D           | ℍ
/// `&quatint;`                    | U+002A16           | ⨖
/// `&quest;`                      | U+00003F           | ?
/// `&questeq;`                    | U+00225F           | ≟
/// `&quot`                        | U+000022           | "
/// `&quot;`                       | U+000022           | "
/// `&rAarr;`                      | U+0021DB           | ⇛
/// `&rArr;`                       | U+0021D2           | ⇒
/// `&rAtail;`                     | U+00291C           | ⤜
/// `&rBarr;`                      | U+00290F           | ⤏
/// `&rHar;`                       | U+002964           | ⥤
/// `&race;`                       | U+00223D, U+000331 | ∽̱
/// `&racute;`                     | U+000155           | ŕ
/// `&radic;`                      | U+00221A           | √
/// `&raemptyv;`                   | U+0029B3           | ⦳
/// `&rang;`                       | U+0027E9           | ⟩
/// `&rangd;`                      | U+002992           | ⦒
/// `&range;`                      | U+0029A5           | ⦥
/// `&rangle;`                     | U+0027E9           | ⟩
/// `&raquo`                       | U+0000BB           | »
/// `&raquo;`                      | U+0000BB           | »
/// `&rarr;`                       | U+002192           | →
/// `&rarrap;`                     | U+002975           | ⥵
/// `&rarrb;`                      | U+0021E5           | ⇥
/// `&rarrbfs;`                    | U+002920           | ⤠
/// `&rarrc;`                      | U+002933           | ⤳
/// `&rarrfs;`                     | U+00291E           | ⤞
/// `&rarrhk;`                     | U+0021AA           | ↪
/// `&rarrlp;`                     | U+0021AC           | ↬
/// `&rarrpl;`                     | U+002945           | ⥅
/// `&rarrsim;`                    | U+002974           | ⥴
/// `&rarrtl;`                     | U+0021A3           | ↣
/// `&rarrw;`                      | U+00219D           | ↝
/// `&ratail;`                     | U+00291A           | ⤚
/// `&ratio;`                      | U+002236           | ∶
/// `&rationals;`                  | U+00211A           | ℚ
/// `&rbarr;`                      | U+00290D           | ⤍
/// `&rbbrk;`                      | U+002773           | ❳
/// `&rbrace;`                     | U+00007D           | }
/// `&rbrack;`                     | U+00005D           | ]
/// `&rbrke;`                      | U+00298C           | ⦌
/// `&rbrksld;`                    | U+00298E           | ⦎
/// `&rbrkslu;`                    | U+002990           | ⦐
/// `&rcaron;`                     | U+000159           | ř
/// `&rcedil;`                     | U+000157           | ŗ
/// `&rceil;`                      | U+002309           | ⌉
/// `&rcub;`                       | U+00007D           | }
/// `&rcy;`                        | U+000440           | р
/// `&rdca;`                       | U+002937           | ⤷
/// `&rdldhar;`                    | U+002969           | ⥩
/// `&rdquo;`                      | U+00201D           | ”
/// `&rdquor;`                     | U+00201D           | ”
/// `&rdsh;`                       | U+0021B3           | ↳
/// `&real;`                       | U+00211C           | ℜ
/// `&realine;`                    | U+00211B           | ℛ
/// `&realpart;`                   | U+00211C           | ℜ
/// `&reals;`                      | U+00211D           | ℝ
/// `&rect;`                       | U+0025AD           | ▭
/// `&reg`                         | U+0000AE           | ®
/// `&reg;`                        | U+0000AE           | ®
/// `&rfisht;`                     | U+00297D           | ⥽
/// `&rfloor;`                     | U+00230B           | ⌋
/// `&rfr;`                        | U+01D52F           | 𝔯
/// `&rhard;`                      | U+0021C1           | ⇁
/// `&rharu;`                      | U+0021C0           | ⇀
/// `&rharul;`                     | U+00296C           | ⥬
/// `&rho;`                        | U+0003C1           | ρ
/// `&rhov;`                       | U+0003F1           | ϱ
/// `&rightarrow;`                 | U+002192           | →
/// `&rightarrowtail;`             | U+0021A3           | ↣
/// `&rightharpoondown;`           | U+0021C1           | ⇁
/// `&rightharpoonup;`             | U+0021C0           | ⇀
/// `&rightleftarrows;`            | U+0021C4           | ⇄
/// `&rightleftharpoons;`          | U+0021CC           | ⇌
/// `&rightrightarrows;`           | U+0021C9           | ⇉
/// `&rightsquigarrow;`            | U+00219D           | ↝
/// `&rightthreetimes;`            | U+0022CC           | ⋌
/// `&ring;`                       | U+0002DA           | ˚
/// `&risingdotseq;`               | U+002253           | ≓
/// `&rlarr;`                      | U+0021C4           | ⇄
/// `&rlhar;`                      | U+0021CC           | ⇌
/// `&rlm;`                        | U+00200F           | ‏
/// `&rmoust;`                     | U+0023B1           | ⎱
/// `&rmoustache;`                 | U+0023B1           | ⎱
/// `&rnmid;`                      | U+002AEE           | ⫮
/// `&roang;`                      | U+0027ED           | ⟭
/// `&roarr;`                      | U+0021FE           | ⇾
/// `&robrk;`                      | U+0027E7           | ⟧
/// `&ropar;`                      | U+002986           | ⦆
/// `&ropf;`                       | U+01D563           | 𝕣
/// `&roplus;`                     | U+002A2E           | ⨮
/// `&rotimes;`                    | U+002A35           | ⨵
/// `&rpar;`                       | U+000029           | )
/// `&rpargt;`                     | U+002994           | ⦔
/// `&rppolint;`                   | U+002A12           | ⨒
/// `&rrarr;`                      | U+0021C9           | ⇉
/// `&rsaquo;`                     | U+00203A           | ›
/// `&rscr;`                       | U+01D4C7           | 𝓇
/// `&rsh;`                        | U+0021B1           | ↱
/// `&rsqb;`                       | U+00005D           | ]
/// `&rsquo;`                      | U+002019           | ’
/// `&rsquor;`                     | U+002019           | ’
/// `&rthree;`                     | U+0022CC           | ⋌
/// `&rtimes;`                     | U+0022CA           | ⋊
/// `&rtri;`                       | U+0025B9           | ▹
/// `&rtrie;`                      | U+0022B5           | ⊵
/// `&rtrif;`                      | U+0025B8           | ▸
/// `&rtriltri;`                   | U+0029CE           | ⧎
/// `&ruluhar;`                    | U+002968           | ⥨
/// `&rx;`                         | U+00211E           | ℞
/// `&sacute;`                     | U+00015B           | ś
/// `&sbquo;`                      | U+00201A           | ‚
/// `&sc;`                         | U+00227B           | ≻
/// `&scE;`                        | U+002AB4           | ⪴
/// `&scap;`                       | U+002AB8           | ⪸
/// `&scaron;`                     | U+000161           | š
/// `&sccue;`                      | U+00227D           | ≽
/// `&sce;`                        | U+002AB0           | ⪰
/// `&scedil;`                     | U+00015F           | ş
/// `&scirc;`                      | U+00015D           | ŝ
/// `&scnE;`                       | U+002AB6           | ⪶
/// `&scnap;`                      | U+002ABA           | ⪺
/// `&scnsim;`                     | U+0022E9           | ⋩
/// `&scpolint;`                   | U+002A13           | ⨓
/// `&scsim;`                      | U+00227F           | ≿
/// `&scy;`                        | U+000441           | с
/// `&sdot;`                       | U+0022C5           | ⋅
/// `&sdotb;`                      | U+0022A1           | ⊡
/// `&sdote;`                      | U+002A66           | ⩦
/// `&seArr;`                      | U+0021D8           | ⇘
/// `&searhk;`                     | U+002925           | ⤥
/// `&searr;`                      | U+002198           | ↘
/// `&searrow;`                    | U+002198           | ↘
/// `&sect`                        | U+0000A7           | §
/// `&sect;`                       | U+0000A7           | §
/// `&semi;`                       | U+00003B           | ;
/// `&seswar;`                     | U+002929           | ⤩
/// `&setminus;`                   | U+002216           | ∖
/// `&setmn;`                      | U+002216           | ∖
/// `&sext;`                       | U+002736           | ✶
/// `&sfr;`                        | U+01D530           | 𝔰
/// `&sfrown;`                     | U+002322           | ⌢
/// `&sharp;`                      | U+00266F           | ♯
/// `&shchcy;`                     | U+000449           | щ
/// `&shcy;`                       | U+000448           | ш
/// `&shortmid;`                   | U+002223           | ∣
/// `&shortparallel;`              | U+002225           | ∥
/// `&shy`                         | U+0000AD           | ­
/// `&shy;`                        | U+0000AD           | ­
/// `&sigma;`                      | U+0003C3           | σ
/// `&sigmaf;`                     | U+0003C2           | ς
/// `&sigmav;`                     | U+0003C2           | ς
/// `&sim;`                        | U+00223C           | ∼
/// `&simdot;`                     | U+002A6A           | ⩪
/// `&sime;`                       | U+002243           | ≃
/// `&simeq;`                      | U+002243           | ≃
/// `&simg;`                       | U+002A9E           | ⪞
/// `&simgE;`                      | U+002AA0           | ⪠
/// `&siml;`                       | U+002A9D           | ⪝
/// `&simlE;`                      | U+002A9F           | ⪟
/// `&simne;`                      | U+002246           | ≆
/// `&simplus;`                    | U+002A24           | ⨤
/// `&simrarr;`                    | U+002972           | ⥲
/// `&slarr;`                      | U+002190           | ←
/// `&smallsetminus;`              | U+002216           | ∖
/// `&smashp;`                     | U+002A33           | ⨳
/// `&smeparsl;`                   | U+0029E4           | ⧤
/// `&smid;`                       | U+002223           | ∣
/// `&smile;`                      | U+002323           | ⌣
/// `&smt;`                        | U+002AAA           | ⪪
/// `&smte;`                       | U+002AAC           | ⪬
/// `&smtes;`                      | U+002AAC, U+00FE00 | ⪬︀
/// `&softcy;`                     | U+00044C           | ь
/// `&sol;`                        | U+00002F           | /
/// `&solb;`                       | U+0029C4           | ⧄
/// `&solbar;`                     | U+00233F           | ⌿
/// `&sopf;`                       | U+01D564           | 𝕤
/// `&spades;`                     | U+002660           | ♠
/// `&spadesuit;`                  | U+002660           | ♠
/// `&spar;`                       | U+002225           | ∥
/// `&sqcap;`                      | U+002293           | ⊓
/// `&sqcaps;`                     | U+002293, U+00FE00 | ⊓︀
/// `&sqcup;`                      | U+002294           | ⊔
/// `&sqcups;`                     | U+002294, U+00FE00 | ⊔︀
/// `&sqsub;`                      | U+00228F           | ⊏
/// `&sqsube;`                     | U+002291           | ⊑
/// `&sqsubset;`                   | U+00228F           | ⊏
/// `&sqsubseteq;`                 | U+002291           | ⊑
/// `&sqsup;`                      | U+002290           | ⊐
/// `&sqsupe;`                     | U+002292           | ⊒
/// `&sqsupset;`                   | U+002290           | ⊐
/// `&sqsupseteq;`                 | U+002292           | ⊒
/// `&squ;`                        | U+0025A1           | □
/// `&square;`                     | U+0025A1           | □
/// `&squarf;`                     | U+0025AA           | ▪
/// `&squf;`                       | U+0025AA           | ▪
/// `&srarr;`                      | U+002192           | →
/// `&sscr;`                       | U+01D4C8           | 𝓈
/// `&ssetmn;`                     | U+002216           | ∖
/// `&ssmile;`                     | U+002323           | ⌣
/// `&sstarf;`                     | U+0022C6           | ⋆
/// `&star;`                       | U+002606           | ☆
/// `&starf;`                      | U+002605           | ★
/// `&straightepsilon;`            | U+0003F5           | ϵ
/// `&straightphi;`                | U+0003D5           | ϕ
/// `&strns;`                      | U+0000AF           | ¯
/// `&sub;`                        | U+002282           | ⊂
/// `&subE;`                       | U+002AC5           | ⫅
/// `&subdot;`                     | U+002ABD           | ⪽
/// `&sube;`                       | U+002286           | ⊆
/// `&subedot;`                    | U+002AC3           | ⫃
/// `&submult;`                    | U+002AC1           | ⫁
/// `&subnE;`                      | U+002ACB           | ⫋
/// `&subne;`                      | U+00228A           | ⊊
/// `&subplus;`                    | U+002ABF           | ⪿
/// `&subrarr;`                    | U+002979           | ⥹
/// `&subset;`                     | U+002282           | ⊂
/// `&subseteq;`                   | U+002286           | ⊆
/// `&subseteqq;`                  | U+002AC5           | ⫅
/// `&subsetneq;`                  | U+00228A           | ⊊
/// `&subsetneqq;`                 | U+002ACB           | ⫋
/// `&subsim;`                     | U+002AC7           | ⫇
/// `&subsub;`                     | U+002AD5           | ⫕
/// `&subsup;`                     | U+002AD3           | ⫓
/// `&succ;`                       | U+00227B           | ≻
/// `&succapprox;`                 | U+002AB8           | ⪸
/// `&succcurlyeq;`                | U+00227D           | ≽
/// `&succeq;`                     | U+002AB0           | ⪰
/// `&succnapprox;`                | U+002ABA           | ⪺
/// `&succneqq;`                   | U+002AB6           | ⪶
/// `&succnsim;`                   | U+0022E9           | ⋩
/// `&succsim;`                    | U+00227F           | ≿
/// `&sum;`                        | U+002211           | ∑
/// `&sung;`                       | U+00266A           | ♪
/// `&sup1`                        | U+0000B9           | ¹
/// `&sup1;`                       | U+0000B9           | ¹
/// `&sup2`                        | U+0000B2           | ²
/// `&sup2;`                       | U+0000B2           | ²
/// `&sup3`                        | U+0000B3           | ³
/// `&sup3;`                       | U+0000B3           | ³
/// `&sup;`                        | U+002283           | ⊃
/// `&supE;`                       | U+002AC6           | ⫆
/// `&supdot;`                     | U+002ABE           | ⪾
/// `&supdsub;`                    | U+002AD8           | ⫘
/// `&supe;`                       | U+002287           | ⊇
/// `&supedot;`                    | U+002AC4           | ⫄
/// `&suphsol;`                    | U+0027C9           | ⟉
/// `&suphsub;`                    | U+002AD7           | ⫗
/// `&suplarr;`                    | U+00297B           | ⥻
/// `&supmult;`                    | U+002AC2           | ⫂
/// `&supnE;`                      | U+002ACC           | ⫌
/// `&supne;`                      | U+00228B           | ⊋
/// `&supplus;`                    | U+002AC0           | ⫀
/// `&supset;`                     | U+002283           | ⊃
/// `&supseteq;`                   | U+002287           | ⊇
/// `&supseteqq;`                  | U+002AC6           | ⫆
/// `&supsetneq;`                  | U+00228B           | ⊋
/// `&supsetneqq;`                 | U+002ACC           | ⫌
/// `&supsim;`                     | U+002AC8           | ⫈
/// `&supsub;`                     | U+002AD4           | ⫔
/// `&supsup;`                     | U+002AD6           | ⫖
/// `&swArr;`                      | U+0021D9           | ⇙
/// `&swarhk;`                     | U+002926           | ⤦
/// `&swarr;`                      | U+002199           | ↙
/// `&swarrow;`                    | U+002199           | ↙
/// `&swnwar;`                     | U+00292A           | ⤪
/// `&szlig`                       | U+0000DF           | ß
/// `&szlig;`                      | U+0000DF           | ß
/// `&target;`                     | U+002316           | ⌖
/// `&tau;`                        | U+0003C4           | τ
/// `&tbrk;`                       | U+0023B4           | ⎴
/// `&tcaron;`                     | U+000165           | ť
/// `&tcedil;`                     | U+000163           | ţ
/// `&tcy;`                        | U+000442           | т
/// `&tdot;`                       | U+0020DB           | ⃛
/// `&telrec;`                     | U+002315           | ⌕
/// `&tfr;`                        | U+01D531           | 𝔱
/// `&there4;`                     | U+002234           | ∴
/// `&therefore;`                  | U+002234           | ∴
/// `&theta;`                      | U+0003B8           | θ
/// `&thetasym;`                   | U+0003D1           | ϑ
/// `&thetav;`                     | U+0003D1           | ϑ
/// `&thickapprox;`                | U+002248           | ≈
/// `&thicksim;`                   | U+00223C           | ∼
/// `&thinsp;`                     | U+002009           |  
/// `&thkap;`                      | U+002248           | ≈
/// `&thksim;`                     | U+00223C           | ∼
/// `&thorn`                       | U+0000FE           | þ
/// `&thorn;`                      | U+0000FE           | þ
/// `&tilde;`                      | U+0002DC           | ˜
/// `&times`                       | U+0000D7           | ×
/// `&times;`                      | U+0000D7           | ×
/// `&timesb;`                     | U+0022A0           | ⊠
/// `&timesbar;`                   | U+002A31           | ⨱
/// `&timesd;`                     | U+002A30           | ⨰
/// `&tint;`                       | U+00222D           | ∭
/// `&toea;`                       | U+002928           | ⤨
/// `&top;`                        | U+0022A4           | ⊤
/// `&topbot;`                     | U+002336           | ⌶
/// `&topcir;`                     | U+002AF1           | ⫱
/// `&topf;`                       | U+01D565           | 𝕥
/// `&topfork;`                    | U+002ADA           | ⫚
/// `&tosa;`                       | U+002929           | ⤩
/// `&tprime;`                     | U+002034           | ‴
/// `&trade;`                      | U+002122           | ™
/// `&triangle;`                   | U+0025B5           | ▵
/// `&triangledown;`               | U+0025BF           | ▿
/// `&triangleleft;`               | U+0025C3           | ◃
/// `&trianglelefteq;`             | U+0022B4           | ⊴
/// `&triangleq;`                  | U+00225C           | ≜
/// `&triangleright;`              | U+0025B9           | ▹
/// `&trianglerighteq;`            | U+0022B5           | ⊵
/// `&tridot;`                     | U+0025EC           | ◬
/// `&trie;`                       | U+00225C           | ≜
/// `&triminus;`                   | U+002A3A           | ⨺
/// `&triplus;`                    | U+002A39           | ⨹
/// `&trisb;`                      | U+0029CD           | ⧍
/// `&tritime;`                    | U+002A3B           | ⨻
/// `&trpezium;`                   | U+0023E2           | ⏢
/// `&tscr;`                       | U+01D4C9           | 𝓉
/// `&tscy;`                       | U+000446           | ц
/// `&tshcy;`                      | U+00045B           | ћ
/// `&tstrok;`                     | U+000167           | ŧ
/// `&twixt;`                      | U+00226C           | ≬
/// `&twoheadleftarrow;`           | U+00219E           | ↞
/// `&twoheadrightarrow;`          | U+0021A0           | ↠
/// `&uArr;`                       | U+0021D1           | ⇑
/// `&uHar;`                       | U+002963           | ⥣
/// `&uacute`                      | U+0000FA           | ú
/// `&uacute;`                     | U+0000FA           | ú
/// `&uarr;`                       | U+002191           | ↑
/// `&ubrcy;`                      | U+00045E           | ў
/// `&ubreve;`                     | U+00016D           | ŭ
/// `&ucirc`                       | U+0000FB           | û
/// `&ucirc;`                      | U+0000FB           | û
/// `&ucy;`                        | U+000443           | у
/// `&udarr;`                      | U+0021C5           | ⇅
/// `&udblac;`                     | U+000171           | ű
/// `&udhar;`                      | U+00296E           | ⥮
/// `&ufisht;`                     | U+00297E           | ⥾
/// `&ufr;`                        | U+01D532           | 𝔲
/// `&ugrave`                      | U+0000F9           | ù
/// `&ugrave;`                     | U+0000F9           | ù
/// `&uharl;`                      | U+0021BF           | ↿
/// `&uharr;`                      | U+0021BE           | ↾
/// `&uhblk;`                      | U+002580           | ▀
/// `&ulcorn;`                     | U+00231C           | ⌜
/// `&ulcorner;`                   | U+00231C           | ⌜
/// `&ulcrop;`                     | U+00230F           | ⌏
/// `&ultri;`                      | U+0025F8           | ◸
/// `&umacr;`                      | U+00016B           | ū
/// `&uml`                         | U+0000A8           | ¨
/// `&uml;`                        | U+0000A8           | ¨
/// `&uogon;`                      | U+000173           | ų
/// `&uopf;`                       | U+01D566           | 𝕦
/// `&uparrow;`                    | U+002191           | ↑
/// `&updownarrow;`                | U+002195           | ↕
/// `&upharpoonleft;`              | U+0021BF           | ↿
/// `&upharpoonright;`             | U+0021BE           | ↾
/// `&uplus;`                      | U+00228E           | ⊎
/// `&upsi;`                       | U+0003C5           | υ
/// `&upsih;`                      | U+0003D2           | ϒ
/// `&upsilon;`                    | U+0003C5           | υ
/// `&upuparrows;`                 | U+0021C8           | ⇈
/// `&urcorn;`                     | U+00231D           | ⌝
/// `&urcorner;`                   | U+00231D           | ⌝
/// `&urcrop;`                     | U+00230E           | ⌎
/// `&uring;`                      | U+00016F           | ů
/// `&urtri;`                      | U+0025F9           | ◹
/// `&uscr;`                       | U+01D4CA           | 𝓊
/// `&utdot;`                      | U+0022F0           | ⋰
/// `&utilde;`                     | U+000169           | ũ
/// `&utri;`                       | U+0025B5           | ▵
/// `&utrif;`                      | U+0025B4           | ▴
/// `&uuarr;`                      | U+0021C8           | ⇈
/// `&uuml`                        | U+0000FC           | ü
/// `&uuml;`                       | U+0000FC           | ü
/// `&uwangle;`                    | U+0029A7           | ⦧
/// `&vArr;`                       | U+0021D5           | ⇕
/// `&vBar;`                       | U+002AE8           | ⫨
/// `&vBarv;`                      | U+002AE9           | ⫩
/// `&vDash;`                      | U+0022A8           | ⊨
/// `&vangrt;`                     | U+00299C           | ⦜
/// `&varepsilon;`                 | U+0003F5           | ϵ
/// `&varkappa;`                   | U+0003F0           | ϰ
/// `&varnothing;`                 | U+002205           | ∅
/// `&varphi;`                     | U+0003D5           | ϕ
/// `&varpi;`                      | U+0003D6           | ϖ
/// `&varpropto;`                  | U+00221D           | ∝
/// `&varr;`                       | U+002195           | ↕
/// `&varrho;`                     | U+0003F1           | ϱ
/// `&varsigma;`                   | U+0003C2           | ς
/// `&varsubsetneq;`               | U+00228A, U+00FE00 | ⊊︀
/// `&varsubsetneqq;`              | U+002ACB, U+00FE00 | ⫋︀
/// `&varsupsetneq;`               | U+00228B, U+00FE00 | ⊋︀
/// `&varsupsetneqq;`              | U+002ACC, U+00FE00 | ⫌︀
/// `&vartheta;`                   | U+0003D1           | ϑ
/// `&vartriangleleft;`            | U+0022B2           | ⊲
/// `&vartriangleright;`           | U+0022B3           | ⊳
/// `&vcy;`                        | U+000432           | в
/// `&vdash;`                      | U+0022A2           | ⊢
/// `&vee;`                        | U+002228           | ∨
/// `&veebar;`                     | U+0022BB           | ⊻
/// `&veeeq;`                      | U+00225A           | ≚
/// `&vellip;`                     | U+0022EE           | ⋮
/// `&verbar;`                     | U+00007C           | |
/// `&vert;`                       | U+00007C           | |
/// `&vfr;`                        | U+01D533           | 𝔳
/// `&vltri;`                      | U+0022B2           | ⊲
/// `&vnsub;`                      | U+002282, U+0020D2 | ⊂⃒
/// `&vnsup;`                      | U+002283, U+0020D2 | ⊃⃒
/// `&vopf;`                       | U+01D567           | 𝕧
/// `&vprop;`                      | U+00221D           | ∝
/// `&vrtri;`                      | U+0022B3           | ⊳
/// `&vscr;`                       | U+01D4CB           | 𝓋
/// `&vsubnE;`                     | U+002ACB, U+00FE00 | ⫋︀
/// `&vsubne;`                     | U+00228A, U+00FE00 | ⊊︀
/// `&vsupnE;`                     | U+002ACC, U+00FE00 | ⫌︀
/// `&vsupne;`                     | U+00228B, U+00FE00 | ⊋︀
/// `&vzigzag;`                    | U+00299A           | ⦚
/// `&wcirc;`                      | U+000175           | ŵ
/// `&wedbar;`                     | U+002A5F           | ⩟
/// `&wedge;`                      | U+002227           | ∧
/// `&wedgeq;`                     | U+002259           | ≙
/// `&weierp;`                     | U+002118           | ℘
/// `&wfr;`                        | U+01D534           | 𝔴
/// `&wopf;`                       | U+01D568           | 𝕨
/// `&wp;`                         | U+002118           | ℘
/// `&wr;`                         | U+002240           | ≀
/// `&wreath;`                     | U+002240           | ≀
/// `&wscr;`                       | U+01D4CC           | 𝓌
/// `&xcap;`                       | U+0022C2           | ⋂
/// `&xcirc;`                      | U+0025EF           | ◯
/// `&xcup;`                       | U+0022C3           | ⋃
/// `&xdtri;`                      | U+0025BD           | ▽
/// `&xfr;`                        | U+01D535           | 𝔵
/// `&xhArr;`                      | U+0027FA           | ⟺
/// `&xharr;`                      | U+0027F7           | ⟷
/// `&xi;`                         | U+0003BE           | ξ
/// `&xlArr;`                      | U+0027F8           | ⟸
/// `&xlarr;`                      | U+0027F5           | ⟵
/// `&xmap;`                       | U+0027FC           | ⟼
/// `&xnis;`                       | U+0022FB           | ⋻
/// `&xodot;`                      | U+002A00           | ⨀
/// `&xopf;`                       | U+01D569           | 𝕩
/// `&xoplus;`                     | U+002A01           | ⨁
/// `&xotime;`                     | U+002A02           | ⨂
/// `&xrArr;`                      | U+0027F9           | ⟹
/// `&xrarr;`                      | U+0027F6           | ⟶
/// `&xscr;`                       | U+01D4CD           | 𝓍
/// `&xsqcup;`                     | U+002A06           | ⨆
/// `&xuplus;`                     | U+002A04           | ⨄
/// `&xutri;`                      | U+0025B3           | △
/// `&xvee;`                       | U+0022C1           | ⋁
/// `&xwedge;`                     | U+0022C0           | ⋀
/// `&yacute`                      | U+0000FD           | ý
/// `&yacute;`                     | U+0000FD           | ý
/// `&yacy;`                       | U+00044F           | я
/// `&ycirc;`                      | U+000177           | ŷ
/// `&ycy;`                        | U+00044B           | ы
/// `&yen`                         | U+0000A5           | ¥
/// `&yen;`                        | U+0000A5           | ¥
/// `&yfr;`                        | U+01D536           | 𝔶
/// `&yicy;`                       | U+000457           | ї
/// `&yopf;`                       | U+01D56A           | 𝕪
/// `&yscr;`                       | U+01D4CE           | 𝓎
/// `&yucy;`                       | U+00044E           | ю
/// `&yuml`                        | U+0000FF           | ÿ
/// `&yuml;`                       | U+0000FF           | ÿ
/// `&zacute;`                     | U+00017A           | ź
/// `&zcaron;`                     | U+00017E           | ž
/// `&zcy;`                        | U+000437           | з
/// `&zdot;`                       | U+00017C           | ż
/// `&zeetrf;`                     | U+002128           | ℨ
/// `&zeta;`                       | U+0003B6           | ζ
/// `&zfr;`                        | U+01D537           | 𝔷
/// `&zhcy;`                       | U+000436           | ж
/// `&zigrarr;`                    | U+0021DD           | ⇝
/// `&zopf;`                       | U+01D56B           | 𝕫
/// `&zscr;`                       | U+01D4CF           | 𝓏
/// `&zwj;`                        | U+00200D           | ‍
/// `&zwnj;`                       | U+00200C           | ‌
#[allow(clippy::unreadable_literal)]
pub static ENTITIES: phf::Map<&[u8], &[u8]> = ::phf::Map {
    key: 16287231350648472473,
    disps: &[
        (1, 3),
        (0, 27),
        (0, 7),
        (0, 79),
        (0, 5),
        (0, 39),
        (0, 0),
        (0, 3),
        (0, 15),
        (0, 10),
        (0, 10),
        (0, 42),
        (0, 174),
        (0, 4),
        (0, 36),
        (0, 0),
        (0, 185),
        (0, 0),
        (0, 125),
        (0, 35),
        (0, 31),
        (0, 44),
        (0, 27),
        (0, 228),
        (0, 281),
        (0, 11),
        (0, 7),
        (0, 35),
        (0, 128),
        (0, 26),
        (0, 1),
        (0, 0),
        (0, 464),
        (0, 196),
        (0, 0),
        (0, 1),
        (0, 790),
        (0, 1),
        (0, 192),
        (0, 463),
        (0, 267),
        (0, 12),
        (0, 23),
        (0, 8),
        (0, 0),
        (0, 62),
        (0, 2207),
        (0, 8),
        (0, 19),
        (0, 146),
        (0, 88),
        (0, 4),
        (0, 1047),
        (0, 29),
        (0, 6),
        (0, 1),
        (0, 29),
        (0, 11),
        (0, 1),
        (0, 38),
        (0, 5),
        (0, 6),
        (0, 0),
        (0, 0),
        (0, 26),
        (0, 1019),
        (0, 29),
        (0, 0),
        (0, 629),
        (0, 580),
        (0, 332),
        (0, 1803),
        (0, 501),
        (0, 69),
        (0, 2),
        (0, 1034),
        (0, 33),
        (0, 0),
        (0, 322),
        (0, 314),
        (0, 726),
        (0, 22),
        (0, 10),
        (0, 778),
        (0, 306),
        (0, 19),
        (0, 2),
        (0, 214),
        (0, 2),
        (0, 0),
        (0, 4),
        (0, 55),
        (0, 1465),
        (0, 42),
        (0, 299),
        (0, 270),
        (0, 0),
        (0, 21),
        (0, 51),
        (0, 1230),
        (0, 281),
        (0, 20),
        (0, 13),
        (0, 3),
        (0, 10),
        (0, 46),
        (0, 17),
        (0, 571),
        (0, 49),
        (0, 779),
        (0, 254),
        (0, 0),
        (0, 0),
        (0, 69),
        (0, 1412),
        (0, 24),
        (0, 17),
        (0, 313),
        (0, 5),
        (0, 38),
        (0, 561),
        (0, 65),
        (0, 1),
        (0, 59),
        (0, 421),
        (0, 5),
        (0, 1747),
        (0, 1),
        (0, 757),
        (0, 360),
        (0, 2),
        (0, 1992),
        (0, 51),
        (0, 23),
        (0, 11),
        (0, 0),
        (0, 39),
        (0, 3),
        (0, 141),
        (0, 18),
        (0, 7),
        (0, 128),
        (0, 3),
        (0, 0),
        (0, 413),
        (0, 1405),
        (0, 137),
        (0, 59),
        (0, 117),
        (0, 167),
        (0, 633),
        (0, 116),
        (0, 73),
        (0, 0),
        (0, 1083),
        (0, 0),
        (0, 18),
        (1, 3),
        (0, 3),
        (0, 6),
        (0, 1357),
        (0, 48),
        (0, 2204),
        (0, 551),
        (0, 48),
        (0, 74),
        (1, 611),
        (0, 4),
        (0, 210),
        (0, 4),
        (0, 24),
        (0, 360),
        (0, 82),
        (0, 1),
        (0, 1283),
        (0, 207),
        (0, 546),
        (0, 31),
        (0, 847),
        (0, 16),
        (0, 2),
        (0, 64),
        (0, 11),
        (0, 439),
        (0, 275),
        (0, 730),
        (0, 67),
        (0, 0),
        (0, 501),
        (0, 932),
        (1, 1326),
        (0, 72),
        (0, 1),
        (0, 282),
        (0, 3),
        (0, 35),
        (0, 1527),
        (0, 34),
        (0, 46),
        (0, 221),
        (4, 1599),
        (0, 159),
        (0, 1114),
        (0, 258),
        (0, 109),
        (1, 118),
        (0, 1646),
        (0, 1172),
        (0, 1),
        (0, 678),
        (1, 1087),
        (0, 1),
        (0, 199),
        (0, 6),
        (0, 100),
        (0, 3),
        (0, 75),
        (0, 3),
        (0, 350),
        (0, 182),
        (0, 700),
        (0, 23),
        (0, 497),
        (0, 29),
        (0, 0),
        (1, 1044),
        (0, 3),
        (0, 17),
        (0, 1115),
        (3, 425),
        (0, 1),
        (0, 1),
        (0, 34),
        (1, 491),
        (0, 34),
        (0, 118),
        (0, 566),
        (0, 155),
        (0, 99),
        (1, 1051),
        (0, 43),
        (0, 17),
        (0, 1),
        (0, 1245),
        (1, 1402),
        (1, 248),
        (0, 1250),
        (0, 11),
        (0, 27),
        (0, 74),
        (0, 1),
        (0, 2),
        (0, 118),
        (4, 338),
        (0, 596),
        (0, 368),
        (0, 78),
        (2, 1216),
        (0, 636),
        (2, 81),
        (0, 990),
        (0, 1),
        (0, 9),
        (0, 376),
        (0, 196),
        (0, 31),
        (0, 11),
        (0, 100),
        (1, 1468),
        (0, 13),
        (0, 36),
        (1, 826),
        (0, 13),
        (0, 90),
        (0, 682),
        (0, 52),
        (0, 29),
        (0, 156),
        (0, 796),
        (0, 121),
        (0, 1939),
        (0, 0),
        (0, 1359),
        (0, 455),
        (0, 4),
        (0, 113),
        (0, 0),
        (0, 29),
        (2, 314),
        (1, 877),
        (0, 13),
        (0, 15),
        (0, 1),
        (0, 54),
        (1, 1030),
        (0, 111),
        (0, 0),
        (1, 147),
        (0, 6),
        (2, 126),
        (0, 1778),
        (0, 6),
        (1, 1752),
        (1, 1774),
        (0, 5),
        (0, 45),
        (0, 1477),
        (0, 355),
        (0, 57),
        (0, 14),
        (0, 5),
        (0, 3),
        (0, 5),
        (0, 263),
        (0, 4),
        (0, 10),
        (0, 722),
        (0, 22),
        (0, 3),
        (0, 50),
        (0, 9),
        (0, 154),
        (1, 5),
        (0, 49),
        (0, 2073),
        (0, 1),
        (0, 5),
        (0, 8),
        (1, 966),
        (0, 34),
        (0, 198),
        (1, 523),
        (0, 142),
        (1, 586),
        (2, 2005),
        (0, 316),
        (10, 761),
        (2, 491),
        (0, 2),
        (0, 162),
        (0, 7),
        (1, 1701),
        (0, 155),
        (2, 1368),
        (1, 2191),
        (0, 5),
        (0, 368),
        (0, 41),
        (3, 1795),
        (4, 840),
        (0, 55),
        (1, 110),
        (0, 107),
        (0, 454),
        (0, 375),
        (0, 101),
        (7, 97),
        (1, 334),
        (0, 0),
        (0, 358),
        (0, 4),
        (0, 148),
        (0, 205),
        (0, 7),
        (0, 38),
        (0, 363),
        (0, 4),
        (0, 86),
        (0, 601),
        (0, 1173),
        (0, 5),
        (0, 23),
        (7, 313),
        (16, 426),
        (0, 237),
        (0, 137),
        (0, 27),
        (0, 15),
        (0, 172),
        (0, 83),
        (0, 18),
        (8, 1760),
        (0, 30),
        (0, 9),
        (0, 230),
        (2, 1049),
        (5, 270),
        (0, 17),
        (0, 142),
        (6, 839),
        (0, 109),
        (1, 112),
        (0, 87),
        (0, 125),
        (0, 3),
        (6, 1326),
        (0, 2070),
        (0, 45),
        (355, 1542),
        (0, 534),
        (0, 743),
        (11, 2080),
        (8, 1242),
        (0, 796),
        (0, 95),
        (0, 6),
        (0, 586),
        (0, 18),
        (14, 238),
        (0, 28),
        (28, 361),
        (0, 161),
        (0, 572),
        (1, 667),
        (0, 97),
        (0, 37),
        (0, 14),
        (38, 1305),
        (0, 1706),
        (0, 1382),
        (0, 679),
        (3, 570),
        (0, 100),
        (0, 243),
        (0, 57),
        (0, 222),
        (0, 40),
        (0, 783),
        (11, 1024),
        (1, 683),
        (0, 747),
        (0, 29),
        (0, 752),
        (0, 3),
        (3, 1471),
        (3, 1303),
        (0, 1600),
        (0, 582),
        (0, 2060),
        (0, 38),
        (0, 145),
        (0, 2026),
        (3, 648),
        (0, 32),
        (16, 1208),
        (0, 123),
        (2, 410),
    ],
    entries: &[
        (&[38, 117, 112, 100, 111, 119, 110, 97, 114, 114, 111, 119, 59], &[226, 134, 149]),
        (&[38, 73, 110, 118, 105, 115, 105, 98, 108, 101, 67, 111, 109, 109, 97, 59], &[226, 129, 163]),
        (&[38, 109, 105, 100, 59], &[226, 136, 163]),
        (&[38, 76, 101, 115, 115, 70, 117, 108, 108, 69, 113, 117, 97, 108, 59], &[226, 137, 166]),
        (&[38, 98, 111, 120, 117, 114, 59], &[226, 148, 148]),
        (&[38, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 144]),
        (&[38, 110, 108, 65, 114, 114, 59], &[226, 135, 141]),
        (&[38, 115, 117, 112, 115, 117, 98, 59], &[226, 171, 148]),
        (&[38, 105, 110, 116, 112, 114, 111, 100, 59], &[226, 168, 188]),
        (&[38, 98, 97, 99, 107, 101, 112, 115, 105, 108, 111, 110, 59], &[207, 182]),
        (&[38, 114, 120, 59], &[226, 132, 158]),
        (&[38, 78, 101, 103, 97, 116, 105, 118, 101, 84, 104, 105, 110, 83, 112, 97, 99, 101, 59], &[226, 128, 139]),
        (&[38, 105, 103, 114, 97, 118, 101], &[195, 172]),
        (&[38, 110, 103, 116, 59], &[226, 137, 175]),
        (&[38, 67, 99, 105, 114, 99, 59], &[196, 136]),
        (&[38, 111, 100, 111, 116, 59], &[226, 138, 153]),
        (&[38, 98, 99, 111, 110, 103, 59], &[226, 137, 140]),
        (&[38, 97, 110, 100, 59], &[226, 136, 167]),
        (&[38, 115, 117, 98, 115, 101, 116, 110, 101, 113, 113, 59], &[226, 171, 139]),
        (&[38, 83, 116, 97, 114, 59], &[226, 139, 134]),
        (&[38, 85, 110, 105, 111, 110, 80, 108, 117, 115, 59], &[226, 138, 142]),
        (&[38, 110, 98, 115, 112, 59], &[194, 160]),
        (&[38, 108, 101, 115, 100, 111, 116, 111, 59], &[226, 170, 129]),
        (&[38, 69, 111, 103, 111, 110, 59], &[196, 152]),
        (&[38, 117, 109, 108, 59], &[194, 168]),
        (&[38, 76, 99, 101, 100, 105, 108, 59], &[196, 187]),
        (&[38, 114, 101, 97, 108, 115, 59], &[226, 132, 157]),
        (&[38, 100, 117, 97, 114, 114, 59], &[226, 135, 181]),
        (&[38, 88, 111, 112, 102, 59], &[240, 157, 149, 143]),
        (&[38, 108, 116, 105, 109, 101, 115, 59], &[226, 139, 137]),
        (&[38, 114, 116, 114, 105, 101, 59], &[226, 138, 181]),
        (&[38, 108, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 148]),
        (&[38, 97, 112, 69, 59], &[226, 169, 176]),
        (&[38, 112, 114, 115, 105, 109, 59], &[226, 137, 190]),
        (&[38, 101, 68, 68, 111, 116, 59], &[226, 169, 183]),
        (&[38, 113, 117, 97, 116, 105, 110, 116, 59], &[226, 168, 150]),
        (&[38, 103, 101, 115, 100, 111, 116, 111, 59], &[226, 170, 130]),
        (&[38, 98, 115, 111, 108, 98, 59], &[226, 167, 133]),
        (&[38, 73, 117, 107, 99, 121, 59], &[208, 134]),
        (&[38, 121, 111, 112, 102, 59], &[240, 157, 149, 170]),
        (&[38, 78, 111, 116, 72, 117, 109, 112, 68, 111, 119, 110, 72, 117, 109, 112, 59], &[226, 137, 142, 204, 184]),
        (&[38, 110, 116, 114, 105, 97, 110, 103, 108, 101, 108, 101, 102, 116, 101, 113, 59], &[226, 139, 172]),
        (&[38, 114, 115, 97, 113, 117, 111, 59], &[226, 128, 186]),
        (&[38, 72, 115, 99, 114, 59], &[226, 132, 139]),
        (&[38, 115, 111, 102, 116, 99, 121, 59], &[209, 140]),
        (&[38, 98, 105, 103, 115, 113, 99, 117, 112, 59], &[226, 168, 134]),
        (&[38, 67, 111, 112, 114, 111, 100, 117, 99, 116, 59], &[226, 136, 144]),
        (&[38, 118, 110, 115, 117, 112, 59], &[226, 138, 131, 226, 131, 146]),
        (&[38, 100, 111, 116, 112, 108, 117, 115, 59], &[226, 136, 148]),
        (&[38, 97, 110, 103, 109, 115, 100, 59], &[226, 136, 161]),
        (&[38, 109, 110, 112, 108, 117, 115, 59], &[226, 136, 147]),
        (&[38, 98, 111, 120, 86, 104, 59], &[226, 149, 171]),
        (&[38, 115, 117, 112, 50, 59], &[194, 178]),
        (&[38, 86, 100, 97, 115, 104, 108, 59], &[226, 171, 166]),
        (&[38, 114, 101, 97, 108, 105, 110, 101, 59], &[226, 132, 155]),
        (&[38, 98, 111, 120, 117, 108, 59], &[226, 148, 152]),
        (&[38, 97, 97, 99, 117, 116, 101, 59], &[195, 161]),
        (&[38, 99, 111, 109, 112, 108, 101, 120, 101, 115, 59], &[226, 132, 130]),
        (&[38, 72, 117, 109, 112, 69, 113, 117, 97, 108, 59], &[226, 137, 143]),
        (&[38, 103, 101, 115, 108, 59], &[226, 139, 155, 239, 184, 128]),
        (&[38, 115, 117, 112, 109, 117, 108, 116, 59], &[226, 171, 130]),
        (&[38, 67, 99, 111, 110, 105, 110, 116, 59], &[226, 136, 176]),
        (&[38, 68, 105, 97, 99, 114, 105, 116, 105, 99, 97, 108, 71, 114, 97, 118, 101, 59], &[96]),
        (&[38, 87, 99, 105, 114, 99, 59], &[197, 180]),
        (&[38, 102, 114, 97, 99, 49, 51, 59], &[226, 133, 147]),
        (&[38, 100, 116, 114, 105, 59], &[226, 150, 191]),
        (&[38, 108, 97, 101, 109, 112, 116, 121, 118, 59], &[226, 166, 180]),
        (&[38, 117, 108, 99, 111, 114, 110, 59], &[226, 140, 156]),
        (&[38, 105, 111, 112, 102, 59], &[240, 157, 149, 154]),
        (&[38, 114, 111, 112, 97, 114, 59], &[226, 166, 134]),
        (&[38, 97, 108, 101, 102, 115, 121, 109, 59], &[226, 132, 181]),
        (&[38, 104, 111, 114, 98, 97, 114, 59], &[226, 128, 149]),
        (&[38, 109, 102, 114, 59], &[240, 157, 148, 170]),
        (&[38, 68, 111, 119, 110, 76, 101, 102, 116, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 150]),
        (&[38, 111, 109, 97, 99, 114, 59], &[197, 141]),
        (&[38, 78, 111, 116, 83, 117, 99, 99, 101, 101, 100, 115, 69, 113, 117, 97, 108, 59], &[226, 170, 176, 204, 184]),
        (&[38, 115, 117, 109, 59], &[226, 136, 145]),
        (&[38, 99, 115, 117, 112, 59], &[226, 171, 144]),
        (&[38, 115, 113, 117, 59], &[226, 150, 161]),
        (&[38, 68, 111, 117, 98, 108, 101, 76, 111, 110, 103, 76, 101, 102, 116, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 159, 186]),
        (&[38, 111, 115, 111, 108, 59], &[226, 138, 152]),
        (&[38, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 144]),
        (&[38, 108, 111, 110, 103, 109, 97, 112, 115, 116, 111, 59], &[226, 159, 188]),
        (&[38, 120, 102, 114, 59], &[240, 157, 148, 181]),
        (&[38, 113, 117, 111, 116], &[34]),
        (&[38, 111, 105, 110, 116, 59], &[226, 136, 174]),
        (&[38, 103, 116, 114, 108, 101, 115, 115, 59], &[226, 137, 183]),
        (&[38, 98, 111, 120, 98, 111, 120, 59], &[226, 167, 137]),
        (&[38, 81, 102, 114, 59], &[240, 157, 148, 148]),
        (&[38, 105, 109, 112, 101, 100, 59], &[198, 181]),
        (&[38, 99, 104, 101, 99, 107, 59], &[226, 156, 147]),
        (&[38, 110, 82, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 143]),
        (&[38, 112, 108, 117, 115, 101, 59], &[226, 169, 178]),
        (&[38, 67, 72, 99, 121, 59], &[208, 167]),
        (&[38, 108, 101, 115, 115, 115, 105, 109, 59], &[226, 137, 178]),
        (&[38, 76, 101, 102, 116, 85, 112, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 152]),
        (&[38, 98, 115, 111, 108, 104, 115, 117, 98, 59], &[226, 159, 136]),
        (&[38, 112, 114, 111, 100, 59], &[226, 136, 143]),
        (&[38, 100, 111, 116, 115, 113, 117, 97, 114, 101, 59], &[226, 138, 161]),
        (&[38, 85, 112, 84, 101, 101, 65, 114, 114, 111, 119, 59], &[226, 134, 165]),
        (&[38, 110, 97, 112, 112, 114, 111, 120, 59], &[226, 137, 137]),
        (&[38, 116, 105, 109, 101, 115, 98, 97, 114, 59], &[226, 168, 177]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 137, 175]),
        (&[38, 70, 105, 108, 108, 101, 100, 83, 109, 97, 108, 108, 83, 113, 117, 97, 114, 101, 59], &[226, 151, 188]),
        (&[38, 115, 99, 69, 59], &[226, 170, 180]),
        (&[38, 68, 111, 117, 98, 108, 101, 76, 101, 102, 116, 84, 101, 101, 59], &[226, 171, 164]),
        (&[38, 69, 99, 105, 114, 99, 59], &[195, 138]),
        (&[38, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 116, 97, 105, 108, 59], &[226, 134, 163]),
        (&[38, 85, 102, 114, 59], &[240, 157, 148, 152]),
        (&[38, 68, 105, 102, 102, 101, 114, 101, 110, 116, 105, 97, 108, 68, 59], &[226, 133, 134]),
        (&[38, 114, 97, 114, 114, 108, 112, 59], &[226, 134, 172]),
        (&[38, 78, 99, 121, 59], &[208, 157]),
        (&[38, 67, 79, 80, 89, 59], &[194, 169]),
        (&[38, 102, 114, 97, 99, 55, 56, 59], &[226, 133, 158]),
        (&[38, 102, 102, 114, 59], &[240, 157, 148, 163]),
        (&[38, 111, 104, 98, 97, 114, 59], &[226, 166, 181]),
        (&[38, 73, 117, 109, 108, 59], &[195, 143]),
        (&[38, 98, 105, 103, 116, 114, 105, 97, 110, 103, 108, 101, 117, 112, 59], &[226, 150, 179]),
        (&[38, 110, 97, 116, 117, 114, 97, 108, 59], &[226, 153, 174]),
        (&[38, 68, 99, 121, 59], &[208, 148]),
        (&[38, 97, 102, 59], &[226, 129, 161]),
        (&[38, 110, 119, 110, 101, 97, 114, 59], &[226, 164, 167]),
        (&[38, 98, 97, 99, 107, 115, 105, 109, 59], &[226, 136, 189]),
        (&[38, 76, 101, 102, 116, 68, 111, 119, 110, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 161]),
        (&[38, 115, 115, 101, 116, 109, 110, 59], &[226, 136, 150]),
        (&[38, 74, 115, 99, 114, 59], &[240, 157, 146, 165]),
        (&[38, 110, 108, 115, 105, 109, 59], &[226, 137, 180]),
        (&[38, 112, 114, 101, 99, 101, 113, 59], &[226, 170, 175]),
        (&[38, 114, 66, 97, 114, 114, 59], &[226, 164, 143]),
        (&[38, 78, 111, 116, 76, 101, 115, 115, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 169, 189, 204, 184]),
        (&[38, 115, 113, 117, 97, 114, 101, 59], &[226, 150, 161]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 100, 59], &[226, 166, 171]),
        (&[38, 115, 117, 98, 115, 101, 116, 101, 113, 59], &[226, 138, 134]),
        (&[38, 101, 113, 117, 105, 118, 68, 68, 59], &[226, 169, 184]),
        (&[38, 98, 102, 114, 59], &[240, 157, 148, 159]),
        (&[38, 103, 116, 114, 97, 114, 114, 59], &[226, 165, 184]),
        (&[38, 82, 111, 117, 110, 100, 73, 109, 112, 108, 105, 101, 115, 59], &[226, 165, 176]),
        (&[38, 115, 99, 121, 59], &[209, 129]),
        (&[38, 118, 100, 97, 115, 104, 59], &[226, 138, 162]),
        (&[38, 114, 97, 114, 114, 112, 108, 59], &[226, 165, 133]),
        (&[38, 98, 105, 103, 115, 116, 97, 114, 59], &[226, 152, 133]),
        (&[38, 102, 114, 97, 99, 49, 52, 59], &[194, 188]),
        (&[38, 101, 117, 109, 108], &[195, 171]),
        (&[38, 83, 113, 117, 97, 114, 101, 59], &[226, 150, 161]),
        (&[38, 108, 101, 115, 115, 100, 111, 116, 59], &[226, 139, 150]),
        (&[38, 118, 66, 97, 114, 118, 59], &[226, 171, 169]),
        (&[38, 105, 101, 99, 121, 59], &[208, 181]),
        (&[38, 114, 101, 103, 59], &[194, 174]),
        (&[38, 110, 111, 116], &[194, 172]),
        (&[38, 114, 104, 111, 118, 59], &[207, 177]),
        (&[38, 69, 111, 112, 102, 59], &[240, 157, 148, 188]),
        (&[38, 104, 101, 97, 114, 116, 115, 117, 105, 116, 59], &[226, 153, 165]),
        (&[38, 68, 68, 111, 116, 114, 97, 104, 100, 59], &[226, 164, 145]),
        (&[38, 73, 97, 99, 117, 116, 101, 59], &[195, 141]),
        (&[38, 101, 108, 115, 100, 111, 116, 59], &[226, 170, 151]),
        (&[38, 109, 99, 111, 109, 109, 97, 59], &[226, 168, 169]),
        (&[38, 117, 112, 115, 105, 59], &[207, 133]),
        (&[38, 108, 102, 114, 59], &[240, 157, 148, 169]),
        (&[38, 108, 102, 108, 111, 111, 114, 59], &[226, 140, 138]),
        (&[38, 118, 97, 114, 110, 111, 116, 104, 105, 110, 103, 59], &[226, 136, 133]),
        (&[38, 109, 105, 110, 117, 115, 98, 59], &[226, 138, 159]),
        (&[38, 78, 111, 116, 83, 117, 98, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 138, 136]),
        (&[38, 79, 103, 114, 97, 118, 101, 59], &[195, 146]),
        (&[38, 115, 101, 116, 109, 105, 110, 117, 115, 59], &[226, 136, 150]),
        (&[38, 120, 115, 113, 99, 117, 112, 59], &[226, 168, 134]),
        (&[38, 105, 105, 59], &[226, 133, 136]),
        (&[38, 76, 84, 59], &[60]),
        (&[38, 104, 115, 108, 97, 115, 104, 59], &[226, 132, 143]),
        (&[38, 99, 104, 99, 121, 59], &[209, 135]),
        (&[38, 78, 99, 101, 100, 105, 108, 59], &[197, 133]),
        (&[38, 104, 97, 114, 114, 59], &[226, 134, 148]),
        (&[38, 108, 98, 97, 114, 114, 59], &[226, 164, 140]),
        (&[38, 117, 115, 99, 114, 59], &[240, 157, 147, 138]),
        (&[38, 110, 108, 101, 113, 113, 59], &[226, 137, 166, 204, 184]),
        (&[38, 121, 99, 121, 59], &[209, 139]),
        (&[38, 115, 109, 97, 115, 104, 112, 59], &[226, 168, 179]),
        (&[38, 76, 111, 119, 101, 114, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 152]),
        (&[38, 68, 111, 117, 98, 108, 101, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 135, 146]),
        (&[38, 97, 110, 103, 114, 116, 118, 98, 59], &[226, 138, 190]),
        (&[38, 115, 117, 112, 115, 117, 112, 59], &[226, 171, 150]),
        (&[38, 78, 97, 99, 117, 116, 101, 59], &[197, 131]),
        (&[38, 114, 104, 97, 114, 117, 108, 59], &[226, 165, 172]),
        (&[38, 111, 99, 105, 114, 59], &[226, 138, 154]),
        (&[38, 100, 101, 103], &[194, 176]),
        (&[38, 100, 97, 115, 104, 59], &[226, 128, 144]),
        (&[38, 112, 114, 110, 69, 59], &[226, 170, 181]),
        (&[38, 116, 97, 114, 103, 101, 116, 59], &[226, 140, 150]),
        (&[38, 99, 97, 99, 117, 116, 101, 59], &[196, 135]),
        (&[38, 83, 99, 101, 100, 105, 108, 59], &[197, 158]),
        (&[38, 108, 110, 101, 113, 59], &[226, 170, 135]),
        (&[38, 73, 109, 97, 103, 105, 110, 97, 114, 121, 73, 59], &[226, 133, 136]),
        (&[38, 69, 99, 105, 114, 99], &[195, 138]),
        (&[38, 100, 105, 97, 109, 111, 110, 100, 59], &[226, 139, 132]),
        (&[38, 105, 115, 105, 110, 118, 59], &[226, 136, 136]),
        (&[38, 116, 114, 105, 109, 105, 110, 117, 115, 59], &[226, 168, 186]),
        (&[38, 112, 97, 114, 97, 59], &[194, 182]),
        (&[38, 69, 99, 121, 59], &[208, 173]),
        (&[38, 98, 108, 107, 49, 52, 59], &[226, 150, 145]),
        (&[38, 97, 108, 112, 104, 97, 59], &[206, 177]),
        (&[38, 84, 99, 121, 59], &[208, 162]),
        (&[38, 115, 117, 112, 100, 115, 117, 98, 59], &[226, 171, 152]),
        (&[38, 68, 101, 108, 116, 97, 59], &[206, 148]),
        (&[38, 109, 105, 99, 114, 111, 59], &[194, 181]),
        (&[38, 99, 117, 114, 114, 101, 110, 59], &[194, 164]),
        (&[38, 78, 111, 116, 83, 117, 99, 99, 101, 101, 100, 115, 59], &[226, 138, 129]),
        (&[38, 115, 113, 115, 117, 98, 115, 101, 116, 101, 113, 59], &[226, 138, 145]),
        (&[38, 112, 97, 114, 97], &[194, 182]),
        (&[38, 122, 99, 97, 114, 111, 110, 59], &[197, 190]),
        (&[38, 111, 109, 101, 103, 97, 59], &[207, 137]),
        (&[38, 103, 101, 115, 100, 111, 116, 59], &[226, 170, 128]),
        (&[38, 99, 104, 101, 99, 107, 109, 97, 114, 107, 59], &[226, 156, 147]),
        (&[38, 100, 105, 103, 97, 109, 109, 97, 59], &[207, 157]),
        (&[38, 89, 111, 112, 102, 59], &[240, 157, 149, 144]),
        (&[38, 85, 112, 100, 111, 119, 110, 97, 114, 114, 111, 119, 59], &[226, 135, 149]),
        (&[38, 98, 111, 120, 68, 114, 59], &[226, 149, 147]),
        (&[38, 101, 114, 97, 114, 114, 59], &[226, 165, 177]),
        (&[38, 99, 99, 117, 112, 115, 115, 109, 59], &[226, 169, 144]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 104, 59], &[226, 166, 175]),
        (&[38, 111, 109, 105, 99, 114, 111, 110, 59], &[206, 191]),
        (&[38, 111, 102, 99, 105, 114, 59], &[226, 166, 191]),
        (&[38, 115, 99, 97, 114, 111, 110, 59], &[197, 161]),
        (&[38, 98, 111, 120, 100, 76, 59], &[226, 149, 149]),
        (&[38, 114, 108, 104, 97, 114, 59], &[226, 135, 140]),
        (&[38, 115, 117, 112, 108, 97, 114, 114, 59], &[226, 165, 187]),
        (&[38, 108, 111, 119, 98, 97, 114, 59], &[95]),
        (&[38, 115, 113, 117, 102, 59], &[226, 150, 170]),
        (&[38, 108, 72, 97, 114, 59], &[226, 165, 162]),
        (&[38, 79, 99, 105, 114, 99, 59], &[195, 148]),
        (&[38, 105, 99, 105, 114, 99, 59], &[195, 174]),
        (&[38, 103, 118, 101, 114, 116, 110, 101, 113, 113, 59], &[226, 137, 169, 239, 184, 128]),
        (&[38, 122, 101, 116, 97, 59], &[206, 182]),
        (&[38, 114, 98, 98, 114, 107, 59], &[226, 157, 179]),
        (&[38, 65, 115, 99, 114, 59], &[240, 157, 146, 156]),
        (&[38, 68, 111, 116, 68, 111, 116, 59], &[226, 131, 156]),
        (&[38, 100, 100, 59], &[226, 133, 134]),
        (&[38, 122, 97, 99, 117, 116, 101, 59], &[197, 186]),
        (&[38, 72, 65, 82, 68, 99, 121, 59], &[208, 170]),
        (&[38, 108, 116, 114, 80, 97, 114, 59], &[226, 166, 150]),
        (&[38, 109, 111, 112, 102, 59], &[240, 157, 149, 158]),
        (&[38, 67, 108, 111, 99, 107, 119, 105, 115, 101, 67, 111, 110, 116, 111, 117, 114, 73, 110, 116, 101, 103, 114, 97, 108, 59], &[226, 136, 178]),
        (&[38, 103, 115, 105, 109, 59], &[226, 137, 179]),
        (&[38, 110, 115, 117, 112, 115, 101, 116, 101, 113, 113, 59], &[226, 171, 134, 204, 184]),
        (&[38, 101, 110, 115, 112, 59], &[226, 128, 130]),
        (&[38, 122, 115, 99, 114, 59], &[240, 157, 147, 143]),
        (&[38, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 146]),
        (&[38, 99, 117, 119, 101, 100, 59], &[226, 139, 143]),
        (&[38, 122, 100, 111, 116, 59], &[197, 188]),
        (&[38, 120, 108, 97, 114, 114, 59], &[226, 159, 181]),
        (&[38, 97, 110, 103, 59], &[226, 136, 160]),
        (&[38, 110, 108, 101, 59], &[226, 137, 176]),
        (&[38, 82, 69, 71], &[194, 174]),
        (&[38, 114, 99, 121, 59], &[209, 128]),
        (&[38, 80, 114, 59], &[226, 170, 187]),
        (&[38, 73, 115, 99, 114, 59], &[226, 132, 144]),
        (&[38, 110, 104, 112, 97, 114, 59], &[226, 171, 178]),
        (&[38, 110, 76, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 141]),
        (&[38, 83, 102, 114, 59], &[240, 157, 148, 150]),
        (&[38, 109, 105, 110, 117, 115, 100, 117, 59], &[226, 168, 170]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 84, 105, 108, 100, 101, 59], &[226, 137, 179]),
        (&[38, 105, 110, 116, 101, 114, 99, 97, 108, 59], &[226, 138, 186]),
        (&[38, 112, 115, 105, 59], &[207, 136]),
        (&[38, 97, 110, 100, 97, 110, 100, 59], &[226, 169, 149]),
        (&[38, 85, 99, 105, 114, 99, 59], &[195, 155]),
        (&[38, 102, 114, 97, 99, 49, 56, 59], &[226, 133, 155]),
        (&[38, 108, 101, 113, 113, 59], &[226, 137, 166]),
        (&[38, 67, 111, 108, 111, 110, 101, 59], &[226, 169, 180]),
        (&[38, 82, 99, 97, 114, 111, 110, 59], &[197, 152]),
        (&[38, 97, 114, 105, 110, 103, 59], &[195, 165]),
        (&[38, 115, 117, 112, 104, 115, 111, 108, 59], &[226, 159, 137]),
        (&[38, 99, 111, 109, 112, 108, 101, 109, 101, 110, 116, 59], &[226, 136, 129]),
        (&[38, 118, 110, 115, 117, 98, 59], &[226, 138, 130, 226, 131, 146]),
        (&[38, 119, 112, 59], &[226, 132, 152]),
        (&[38, 114, 102, 108, 111, 111, 114, 59], &[226, 140, 139]),
        (&[38, 115, 101, 116, 109, 110, 59], &[226, 136, 150]),
        (&[38, 98, 101, 116, 104, 59], &[226, 132, 182]),
        (&[38, 84, 105, 108, 100, 101, 84, 105, 108, 100, 101, 59], &[226, 137, 136]),
        (&[38, 76, 101, 102, 116, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 146]),
        (&[38, 108, 110, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 137]),
        (&[38, 101, 116, 97, 59], &[206, 183]),
        (&[38, 97, 110, 103, 115, 112, 104, 59], &[226, 136, 162]),
        (&[38, 65, 77, 80, 59], &[38]),
        (&[38, 111, 97, 99, 117, 116, 101], &[195, 179]),
        (&[38, 105, 115, 105, 110, 59], &[226, 136, 136]),
        (&[38, 98, 105, 103, 117, 112, 108, 117, 115, 59], &[226, 168, 132]),
        (&[38, 101, 99, 111, 108, 111, 110, 59], &[226, 137, 149]),
        (&[38, 98, 111, 120, 68, 108, 59], &[226, 149, 150]),
        (&[38, 73, 97, 99, 117, 116, 101], &[195, 141]),
        (&[38, 110, 105, 115, 59], &[226, 139, 188]),
        (&[38, 98, 98, 114, 107, 116, 98, 114, 107, 59], &[226, 142, 182]),
        (&[38, 108, 66, 97, 114, 114, 59], &[226, 164, 142]),
        (&[38, 78, 101, 115, 116, 101, 100, 71, 114, 101, 97, 116, 101, 114, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 137, 171]),
        (&[38, 85, 112, 115, 105, 59], &[207, 146]),
        (&[38, 118, 115, 117, 112, 110, 69, 59], &[226, 171, 140, 239, 184, 128]),
        (&[38, 115, 113, 115, 117, 98, 101, 59], &[226, 138, 145]),
        (&[38, 122, 102, 114, 59], &[240, 157, 148, 183]),
        (&[38, 108, 104, 97, 114, 100, 59], &[226, 134, 189]),
        (&[38, 115, 97, 99, 117, 116, 101, 59], &[197, 155]),
        (&[38, 111, 114, 105, 103, 111, 102, 59], &[226, 138, 182]),
        (&[38, 98, 111, 120, 72, 85, 59], &[226, 149, 169]),
        (&[38, 111, 117, 109, 108, 59], &[195, 182]),
        (&[38, 99, 97, 112, 100, 111, 116, 59], &[226, 169, 128]),
        (&[38, 114, 101, 99, 116, 59], &[226, 150, 173]),
        (&[38, 110, 112, 114, 101, 59], &[226, 170, 175, 204, 184]),
        (&[38, 112, 108, 117, 115, 109, 110], &[194, 177]),
        (&[38, 112, 114, 110, 115, 105, 109, 59], &[226, 139, 168]),
        (&[38, 110, 101, 120, 105, 115, 116, 59], &[226, 136, 132]),
        (&[38, 115, 111, 108, 98, 97, 114, 59], &[226, 140, 191]),
        (&[38, 116, 105, 108, 100, 101, 59], &[203, 156]),
        (&[38, 104, 111, 111, 107, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 170]),
        (&[38, 89, 99, 121, 59], &[208, 171]),
        (&[38, 110, 111, 116, 105, 110, 118, 99, 59], &[226, 139, 182]),
        (&[38, 76, 101, 102, 116, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 148]),
        (&[38, 114, 97, 114, 114, 119, 59], &[226, 134, 157]),
        (&[38, 120, 111, 112, 102, 59], &[240, 157, 149, 169]),
        (&[38, 115, 113, 99, 117, 112, 115, 59], &[226, 138, 148, 239, 184, 128]),
        (&[38, 118, 102, 114, 59], &[240, 157, 148, 179]),
        (&[38, 117, 114, 99, 114, 111, 112, 59], &[226, 140, 142]),
        (&[38, 80, 111, 112, 102, 59], &[226, 132, 153]),
        (&[38, 89, 117, 109, 108, 59], &[197, 184]),
        (&[38, 89, 115, 99, 114, 59], &[240, 157, 146, 180]),
        (&[38, 76, 101, 102, 116, 85, 112, 86, 101, 99, 116, 111, 114, 59], &[226, 134, 191]),
        (&[38, 115, 117, 98, 59], &[226, 138, 130]),
        (&[38, 110, 116, 114, 105, 97, 110, 103, 108, 101, 108, 101, 102, 116, 59], &[226, 139, 170]),
        (&[38, 114, 97, 99, 101, 59], &[226, 136, 189, 204, 177]),
        (&[38, 103, 101, 108, 59], &[226, 139, 155]),
        (&[38, 82, 105, 103, 104, 116, 84, 114, 105, 97, 110, 103, 108, 101, 69, 113, 117, 97, 108, 59], &[226, 138, 181]),
        (&[38, 98, 105, 103, 99, 117, 112, 59], &[226, 139, 131]),
        (&[38, 83, 113, 117, 97, 114, 101, 85, 110, 105, 111, 110, 59], &[226, 138, 148]),
        (&[38, 100, 117, 104, 97, 114, 59], &[226, 165, 175]),
        (&[38, 110, 115, 117, 98, 115, 101, 116, 101, 113, 113, 59], &[226, 171, 133, 204, 184]),
        (&[38, 118, 97, 114, 114, 59], &[226, 134, 149]),
        (&[38, 78, 111, 116, 86, 101, 114, 116, 105, 99, 97, 108, 66, 97, 114, 59], &[226, 136, 164]),
        (&[38, 84, 83, 99, 121, 59], &[208, 166]),
        (&[38, 108, 97, 109, 98, 100, 97, 59], &[206, 187]),
        (&[38, 118, 101, 114, 98, 97, 114, 59], &[124]),
        (&[38, 110, 97, 112, 59], &[226, 137, 137]),
        (&[38, 111, 114, 59], &[226, 136, 168]),
        (&[38, 99, 111, 108, 111, 110, 59], &[58]),
        (&[38, 109, 100, 97, 115, 104, 59], &[226, 128, 148]),
        (&[38, 73, 109, 59], &[226, 132, 145]),
        (&[38, 101, 120, 99, 108, 59], &[33]),
        (&[38, 110, 97, 116, 117, 114, 97, 108, 115, 59], &[226, 132, 149]),
        (&[38, 115, 117, 112, 115, 101, 116, 110, 101, 113, 59], &[226, 138, 139]),
        (&[38, 102, 114, 97, 99, 51, 56, 59], &[226, 133, 156]),
        (&[38, 99, 111, 109, 109, 97, 59], &[44]),
        (&[38, 76, 108, 59], &[226, 139, 152]),
        (&[38, 115, 119, 97, 114, 104, 107, 59], &[226, 164, 166]),
        (&[38, 110, 101, 97, 114, 114, 111, 119, 59], &[226, 134, 151]),
        (&[38, 117, 119, 97, 110, 103, 108, 101, 59], &[226, 166, 167]),
        (&[38, 98, 97, 99, 107, 115, 105, 109, 101, 113, 59], &[226, 139, 141]),
        (&[38, 98, 111, 116, 116, 111, 109, 59], &[226, 138, 165]),
        (&[38, 97, 112, 112, 114, 111, 120, 59], &[226, 137, 136]),
        (&[38, 112, 101, 114, 109, 105, 108, 59], &[226, 128, 176]),
        (&[38, 101, 111, 112, 102, 59], &[240, 157, 149, 150]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 69, 113, 117, 97, 108, 59], &[226, 137, 165]),
        (&[38, 111, 100, 98, 108, 97, 99, 59], &[197, 145]),
        (&[38, 114, 65, 97, 114, 114, 59], &[226, 135, 155]),
        (&[38, 100, 111, 119, 110, 97, 114, 114, 111, 119, 59], &[226, 134, 147]),
        (&[38, 108, 115, 105, 109, 101, 59], &[226, 170, 141]),
        (&[38, 116, 115, 116, 114, 111, 107, 59], &[197, 167]),
        (&[38, 105, 102, 102, 59], &[226, 135, 148]),
        (&[38, 102, 114, 97, 99, 49, 53, 59], &[226, 133, 149]),
        (&[38, 116, 114, 105, 100, 111, 116, 59], &[226, 151, 172]),
        (&[38, 98, 105, 103, 111, 100, 111, 116, 59], &[226, 168, 128]),
        (&[38, 85, 110, 100, 101, 114, 66, 114, 97, 99, 107, 101, 116, 59], &[226, 142, 181]),
        (&[38, 102, 114, 97, 115, 108, 59], &[226, 129, 132]),
        (&[38, 116, 100, 111, 116, 59], &[226, 131, 155]),
        (&[38, 115, 117, 112, 101, 59], &[226, 138, 135]),
        (&[38, 108, 97, 116, 59], &[226, 170, 171]),
        (&[38, 115, 117, 112, 49, 59], &[194, 185]),
        (&[38, 98, 111, 120, 86, 114, 59], &[226, 149, 159]),
        (&[38, 115, 117, 99, 99, 110, 101, 113, 113, 59], &[226, 170, 182]),
        (&[38, 78, 117, 59], &[206, 157]),
        (&[38, 115, 99, 101, 100, 105, 108, 59], &[197, 159]),
        (&[38, 112, 101, 114, 112, 59], &[226, 138, 165]),
        (&[38, 104, 111, 111, 107, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 169]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 70, 117, 108, 108, 69, 113, 117, 97, 108, 59], &[226, 137, 167]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 114, 105, 103, 104, 116, 59], &[226, 150, 185]),
        (&[38, 97, 111, 112, 102, 59], &[240, 157, 149, 146]),
        (&[38, 120, 100, 116, 114, 105, 59], &[226, 150, 189]),
        (&[38, 97, 99, 105, 114, 99], &[195, 162]),
        (&[38, 117, 103, 114, 97, 118, 101, 59], &[195, 185]),
        (&[38, 100, 98, 108, 97, 99, 59], &[203, 157]),
        (&[38, 109, 108, 100, 114, 59], &[226, 128, 166]),
        (&[38, 79, 99, 105, 114, 99], &[195, 148]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 97, 59], &[226, 166, 168]),
        (&[38, 114, 97, 110, 103, 100, 59], &[226, 166, 146]),
        (&[38, 74, 99, 121, 59], &[208, 153]),
        (&[38, 68, 111, 117, 98, 108, 101, 68, 111, 119, 110, 65, 114, 114, 111, 119, 59], &[226, 135, 147]),
        (&[38, 99, 117, 114, 114, 101, 110], &[194, 164]),
        (&[38, 121, 97, 99, 117, 116, 101], &[195, 189]),
        (&[38, 114, 97, 114, 114, 99, 59], &[226, 164, 179]),
        (&[38, 110, 114, 116, 114, 105, 101, 59], &[226, 139, 173]),
        (&[38, 68, 111, 117, 98, 108, 101, 76, 101, 102, 116, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 135, 148]),
        (&[38, 98, 105, 103, 118, 101, 101, 59], &[226, 139, 129]),
        (&[38, 115, 99, 115, 105, 109, 59], &[226, 137, 191]),
        (&[38, 67, 111, 112, 102, 59], &[226, 132, 130]),
        (&[38, 110, 76, 108, 59], &[226, 139, 152, 204, 184]),
        (&[38, 71, 115, 99, 114, 59], &[240, 157, 146, 162]),
        (&[38, 99, 97, 112, 59], &[226, 136, 169]),
        (&[38, 110, 111, 112, 102, 59], &[240, 157, 149, 159]),
        (&[38, 69, 117, 109, 108, 59], &[195, 139]),
        (&[38, 102, 112, 97, 114, 116, 105, 110, 116, 59], &[226, 168, 141]),
        (&[38, 69, 102, 114, 59], &[240, 157, 148, 136]),
        (&[38, 83, 104, 111, 114, 116, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 146]),
        (&[38, 110, 116, 103, 108, 59], &[226, 137, 185]),
        (&[38, 69, 115, 99, 114, 59], &[226, 132, 176]),
        (&[38, 117, 97, 114, 114, 59], &[226, 134, 145]),
        (&[38, 99, 117, 112, 98, 114, 99, 97, 112, 59], &[226, 169, 136]),
        (&[38, 97, 109, 97, 99, 114, 59], &[196, 129]),
        (&[38, 108, 100, 113, 117, 111, 114, 59], &[226, 128, 158]),
        (&[38, 100, 115, 111, 108, 59], &[226, 167, 182]),
        (&[38, 68, 111, 119, 110, 65, 114, 114, 111, 119, 59], &[226, 134, 147]),
        (&[38, 101, 115, 105, 109, 59], &[226, 137, 130]),
        (&[38, 102, 110, 111, 102, 59], &[198, 146]),
        (&[38, 100, 119, 97, 110, 103, 108, 101, 59], &[226, 166, 166]),
        (&[38, 115, 111, 108, 59], &[47]),
        (&[38, 68, 105, 97, 109, 111, 110, 100, 59], &[226, 139, 132]),
        (&[38, 114, 100, 115, 104, 59], &[226, 134, 179]),
        (&[38, 83, 117, 98, 59], &[226, 139, 144]),
        (&[38, 76, 101, 115, 115, 76, 101, 115, 115, 59], &[226, 170, 161]),
        (&[38, 98, 111, 120, 72, 68, 59], &[226, 149, 166]),
        (&[38, 108, 103, 59], &[226, 137, 182]),
        (&[38, 100, 106, 99, 121, 59], &[209, 146]),
        (&[38, 115, 113, 99, 117, 112, 59], &[226, 138, 148]),
        (&[38, 116, 104, 111, 114, 110, 59], &[195, 190]),
        (&[38, 110, 112, 111, 108, 105, 110, 116, 59], &[226, 168, 148]),
        (&[38, 104, 97, 109, 105, 108, 116, 59], &[226, 132, 139]),
        (&[38, 76, 101, 115, 115, 69, 113, 117, 97, 108, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 139, 154]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 98, 59], &[226, 166, 169]),
        (&[38, 108, 101, 102, 116, 116, 104, 114, 101, 101, 116, 105, 109, 101, 115, 59], &[226, 139, 139]),
        (&[38, 115, 109, 116, 101, 59], &[226, 170, 172]),
        (&[38, 99, 115, 99, 114, 59], &[240, 157, 146, 184]),
        (&[38, 103, 110, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 138]),
        (&[38, 78, 111, 116, 69, 120, 105, 115, 116, 115, 59], &[226, 136, 132]),
        (&[38, 117, 65, 114, 114, 59], &[226, 135, 145]),
        (&[38, 110, 115, 109, 105, 100, 59], &[226, 136, 164]),
        (&[38, 69, 97, 99, 117, 116, 101, 59], &[195, 137]),
        (&[38, 110, 111, 116, 105, 110, 118, 97, 59], &[226, 136, 137]),
        (&[38, 83, 117, 98, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 138, 134]),
        (&[38, 81, 115, 99, 114, 59], &[240, 157, 146, 172]),
        (&[38, 101, 113, 99, 105, 114, 99, 59], &[226, 137, 150]),
        (&[38, 115, 99, 101, 59], &[226, 170, 176]),
        (&[38, 68, 111, 116, 69, 113, 117, 97, 108, 59], &[226, 137, 144]),
        (&[38, 101, 109, 97, 99, 114, 59], &[196, 147]),
        (&[38, 99, 111, 109, 112, 59], &[226, 136, 129]),
        (&[38, 110, 97, 112, 105, 100, 59], &[226, 137, 139, 204, 184]),
        (&[38, 67, 101, 100, 105, 108, 108, 97, 59], &[194, 184]),
        (&[38, 118, 65, 114, 114, 59], &[226, 135, 149]),
        (&[38, 115, 105, 103, 109, 97, 118, 59], &[207, 130]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 100, 111, 119, 110, 59], &[226, 150, 191]),
        (&[38, 97, 99, 59], &[226, 136, 190]),
        (&[38, 108, 97, 114, 114, 112, 108, 59], &[226, 164, 185]),
        (&[38, 114, 101, 97, 108, 112, 97, 114, 116, 59], &[226, 132, 156]),
        (&[38, 83, 111, 112, 102, 59], &[240, 157, 149, 138]),
        (&[38, 110, 112, 114, 99, 117, 101, 59], &[226, 139, 160]),
        (&[38, 83, 113, 114, 116, 59], &[226, 136, 154]),
        (&[38, 108, 97, 110, 103, 100, 59], &[226, 166, 145]),
        (&[38, 84, 104, 101, 114, 101, 102, 111, 114, 101, 59], &[226, 136, 180]),
        (&[38, 78, 115, 99, 114, 59], &[240, 157, 146, 169]),
        (&[38, 112, 97, 114, 115, 105, 109, 59], &[226, 171, 179]),
        (&[38, 121, 117, 99, 121, 59], &[209, 142]),
        (&[38, 110, 108, 69, 59], &[226, 137, 166, 204, 184]),
        (&[38, 104, 115, 99, 114, 59], &[240, 157, 146, 189]),
        (&[38, 121, 97, 99, 117, 116, 101, 59], &[195, 189]),
        (&[38, 86, 101, 114, 116, 105, 99, 97, 108, 84, 105, 108, 100, 101, 59], &[226, 137, 128]),
        (&[38, 86, 111, 112, 102, 59], &[240, 157, 149, 141]),
        (&[38, 118, 97, 114, 116, 114, 105, 97, 110, 103, 108, 101, 114, 105, 103, 104, 116, 59], &[226, 138, 179]),
        (&[38, 86, 101, 114, 121, 84, 104, 105, 110, 83, 112, 97, 99, 101, 59], &[226, 128, 138]),
        (&[38, 115, 116, 114, 97, 105, 103, 104, 116, 101, 112, 115, 105, 108, 111, 110, 59], &[207, 181]),
        (&[38, 67, 99, 101, 100, 105, 108], &[195, 135]),
        (&[38, 68, 83, 99, 121, 59], &[208, 133]),
        (&[38, 110, 101, 115, 101, 97, 114, 59], &[226, 164, 168]),
        (&[38, 69, 112, 115, 105, 108, 111, 110, 59], &[206, 149]),
        (&[38, 98, 108, 111, 99, 107, 59], &[226, 150, 136]),
        (&[38, 115, 111, 112, 102, 59], &[240, 157, 149, 164]),
        (&[38, 115, 117, 99, 99, 101, 113, 59], &[226, 170, 176]),
        (&[38, 103, 99, 121, 59], &[208, 179]),
        (&[38, 116, 114, 105, 116, 105, 109, 101, 59], &[226, 168, 187]),
        (&[38, 99, 111, 108, 111, 110, 101, 59], &[226, 137, 148]),
        (&[38, 99, 105, 114, 99, 108, 101, 97, 114, 114, 111, 119, 108, 101, 102, 116, 59], &[226, 134, 186]),
        (&[38, 82, 101, 118, 101, 114, 115, 101, 69, 113, 117, 105, 108, 105, 98, 114, 105, 117, 109, 59], &[226, 135, 139]),
        (&[38, 110, 112, 97, 114, 115, 108, 59], &[226, 171, 189, 226, 131, 165]),
        (&[38, 98, 117, 109, 112, 59], &[226, 137, 142]),
        (&[38, 105, 105, 110, 102, 105, 110, 59], &[226, 167, 156]),
        (&[38, 109, 115, 116, 112, 111, 115, 59], &[226, 136, 190]),
        (&[38, 75, 102, 114, 59], &[240, 157, 148, 142]),
        (&[38, 99, 115, 117, 98, 59], &[226, 171, 143]),
        (&[38, 114, 105, 103, 104, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 115, 59], &[226, 135, 137]),
        (&[38, 108, 101, 115, 59], &[226, 169, 189]),
        (&[38, 68, 111, 117, 98, 108, 101, 76, 111, 110, 103, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 159, 184]),
        (&[38, 108, 98, 114, 97, 99, 101, 59], &[123]),
        (&[38, 98, 111, 120, 104, 85, 59], &[226, 149, 168]),
        (&[38, 99, 117, 112, 111, 114, 59], &[226, 169, 133]),
        (&[38, 115, 117, 98, 100, 111, 116, 59], &[226, 170, 189]),
        (&[38, 115, 117, 98, 110, 101, 59], &[226, 138, 138]),
        (&[38, 100, 101, 109, 112, 116, 121, 118, 59], &[226, 166, 177]),
        (&[38, 114, 97, 114, 114, 97, 112, 59], &[226, 165, 181]),
        (&[38, 102, 114, 97, 99, 52, 53, 59], &[226, 133, 152]),
        (&[38, 108, 101, 115, 103, 59], &[226, 139, 154, 239, 184, 128]),
        (&[38, 97, 103, 114, 97, 118, 101], &[195, 160]),
        (&[38, 69, 103, 114, 97, 118, 101], &[195, 136]),
        (&[38, 98, 111, 120, 112, 108, 117, 115, 59], &[226, 138, 158]),
        (&[38, 112, 97, 114, 115, 108, 59], &[226, 171, 189]),
        (&[38, 78, 101, 103, 97, 116, 105, 118, 101, 84, 104, 105, 99, 107, 83, 112, 97, 99, 101, 59], &[226, 128, 139]),
        (&[38, 121, 97, 99, 121, 59], &[209, 143]),
        (&[38, 90, 72, 99, 121, 59], &[208, 150]),
        (&[38, 83, 117, 99, 99, 101, 101, 100, 115, 84, 105, 108, 100, 101, 59], &[226, 137, 191]),
        (&[38, 108, 101, 115, 115, 103, 116, 114, 59], &[226, 137, 182]),
        (&[38, 114, 98, 97, 114, 114, 59], &[226, 164, 141]),
        (&[38, 71, 84, 59], &[62]),
        (&[38, 119, 114, 101, 97, 116, 104, 59], &[226, 137, 128]),
        (&[38, 110, 111, 116, 110, 105, 118, 97, 59], &[226, 136, 140]),
        (&[38, 103, 103, 59], &[226, 137, 171]),
        (&[38, 97, 101, 108, 105, 103, 59], &[195, 166]),
        (&[38, 104, 101, 108, 108, 105, 112, 59], &[226, 128, 166]),
        (&[38, 108, 97, 112, 59], &[226, 170, 133]),
        (&[38, 66, 117, 109, 112, 101, 113, 59], &[226, 137, 142]),
        (&[38, 116, 115, 104, 99, 121, 59], &[209, 155]),
        (&[38, 78, 111, 112, 102, 59], &[226, 132, 149]),
        (&[38, 97, 102, 114, 59], &[240, 157, 148, 158]),
        (&[38, 98, 117, 109, 112, 101, 113, 59], &[226, 137, 143]),
        (&[38, 108, 108, 99, 111, 114, 110, 101, 114, 59], &[226, 140, 158]),
        (&[38, 65, 103, 114, 97, 118, 101, 59], &[195, 128]),
        (&[38, 69, 117, 109, 108], &[195, 139]),
        (&[38, 106, 115, 101, 114, 99, 121, 59], &[209, 152]),
        (&[38, 110, 76, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 142]),
        (&[38, 98, 110, 101, 113, 117, 105, 118, 59], &[226, 137, 161, 226, 131, 165]),
        (&[38, 83, 104, 111, 114, 116, 68, 111, 119, 110, 65, 114, 114, 111, 119, 59], &[226, 134, 147]),
        (&[38, 114, 97, 116, 105, 111, 110, 97, 108, 115, 59], &[226, 132, 154]),
        (&[38, 83, 117, 98, 115, 101, 116, 59], &[226, 139, 144]),
        (&[38, 67, 111, 110, 103, 114, 117, 101, 110, 116, 59], &[226, 137, 161]),
        (&[38, 103, 115, 105, 109, 108, 59], &[226, 170, 144]),
        (&[38, 80, 114, 105, 109, 101, 59], &[226, 128, 179]),
        (&[38, 75, 99, 121, 59], &[208, 154]),
        (&[38, 111, 99, 105, 114, 99], &[195, 180]),
        (&[38, 98, 115, 105, 109, 101, 59], &[226, 139, 141]),
        (&[38, 83, 113, 117, 97, 114, 101, 83, 117, 112, 101, 114, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 138, 146]),
        (&[38, 68, 111, 119, 110, 82, 105, 103, 104, 116, 86, 101, 99, 116, 111, 114, 59], &[226, 135, 129]),
        (&[38, 108, 97, 110, 103, 59], &[226, 159, 168]),
        (&[38, 118, 97, 114, 101, 112, 115, 105, 108, 111, 110, 59], &[207, 181]),
        (&[38, 67, 111, 110, 116, 111, 117, 114, 73, 110, 116, 101, 103, 114, 97, 108, 59], &[226, 136, 174]),
        (&[38, 67, 114, 111, 115, 115, 59], &[226, 168, 175]),
        (&[38, 102, 101, 109, 97, 108, 101, 59], &[226, 153, 128]),
        (&[38, 103, 97, 109, 109, 97, 100, 59], &[207, 157]),
        (&[38, 117, 109, 97, 99, 114, 59], &[197, 171]),
        (&[38, 101, 112, 115, 105, 108, 111, 110, 59], &[206, 181]),
        (&[38, 76, 115, 116, 114, 111, 107, 59], &[197, 129]),
        (&[38, 98, 117, 109, 112, 69, 59], &[226, 170, 174]),
        (&[38, 82, 105, 103, 104, 116, 85, 112, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 148]),
        (&[38, 99, 121, 108, 99, 116, 121, 59], &[226, 140, 173]),
        (&[38, 122, 104, 99, 121, 59], &[208, 182]),
        (&[38, 69, 113, 117, 105, 108, 105, 98, 114, 105, 117, 109, 59], &[226, 135, 140]),
        (&[38, 115, 104, 111, 114, 116, 112, 97, 114, 97, 108, 108, 101, 108, 59], &[226, 136, 165]),
        (&[38, 79, 112, 101, 110, 67, 117, 114, 108, 121, 68, 111, 117, 98, 108, 101, 81, 117, 111, 116, 101, 59], &[226, 128, 156]),
        (&[38, 117, 116, 105, 108, 100, 101, 59], &[197, 169]),
        (&[38, 110, 115, 117, 98, 115, 101, 116, 101, 113, 59], &[226, 138, 136]),
        (&[38, 75, 115, 99, 114, 59], &[240, 157, 146, 166]),
        (&[38, 108, 98, 114, 107, 115, 108, 117, 59], &[226, 166, 141]),
        (&[38, 80, 111, 105, 110, 99, 97, 114, 101, 112, 108, 97, 110, 101, 59], &[226, 132, 140]),
        (&[38, 120, 105, 59], &[206, 190]),
        (&[38, 76, 97, 110, 103, 59], &[226, 159, 170]),
        (&[38, 100, 105, 118, 105, 100, 101], &[195, 183]),
        (&[38, 101, 101, 59], &[226, 133, 135]),
        (&[38, 115, 113, 115, 117, 98, 59], &[226, 138, 143]),
        (&[38, 82, 102, 114, 59], &[226, 132, 156]),
        (&[38, 109, 108, 99, 112, 59], &[226, 171, 155]),
        (&[38, 108, 108, 59], &[226, 137, 170]),
        (&[38, 101, 99, 105, 114, 99, 59], &[195, 170]),
        (&[38, 98, 98, 114, 107, 59], &[226, 142, 181]),
        (&[38, 103, 97, 109, 109, 97, 59], &[206, 179]),
        (&[38, 68, 101, 108, 59], &[226, 136, 135]),
        (&[38, 98, 111, 120, 118, 72, 59], &[226, 149, 170]),
        (&[38, 110, 111, 116, 105, 110, 69, 59], &[226, 139, 185, 204, 184]),
        (&[38, 111, 97, 115, 116, 59], &[226, 138, 155]),
        (&[38, 76, 101, 102, 116, 67, 101, 105, 108, 105, 110, 103, 59], &[226, 140, 136]),
        (&[38, 105, 117, 109, 108, 59], &[195, 175]),
        (&[38, 115, 117, 110, 103, 59], &[226, 153, 170]),
        (&[38, 82, 97, 114, 114, 59], &[226, 134, 160]),
        (&[38, 100, 108, 99, 114, 111, 112, 59], &[226, 140, 141]),
        (&[38, 108, 69, 59], &[226, 137, 166]),
        (&[38, 110, 108, 97, 114, 114, 59], &[226, 134, 154]),
        (&[38, 68, 111, 119, 110, 82, 105, 103, 104, 116, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 159]),
        (&[38, 114, 115, 104, 59], &[226, 134, 177]),
        (&[38, 112, 111, 117, 110, 100], &[194, 163]),
        (&[38, 118, 97, 114, 116, 114, 105, 97, 110, 103, 108, 101, 108, 101, 102, 116, 59], &[226, 138, 178]),
        (&[38, 78, 99, 97, 114, 111, 110, 59], &[197, 135]),
        (&[38, 76, 111, 110, 103, 76, 101, 102, 116, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 159, 183]),
        (&[38, 115, 105, 109, 103, 59], &[226, 170, 158]),
        (&[38, 122, 119, 106, 59], &[226, 128, 141]),
        (&[38, 100, 115, 99, 114, 59], &[240, 157, 146, 185]),
        (&[38, 84, 111, 112, 102, 59], &[240, 157, 149, 139]),
        (&[38, 110, 116, 108, 103, 59], &[226, 137, 184]),
        (&[38, 115, 117, 98, 115, 117, 98, 59], &[226, 171, 149]),
        (&[38, 86, 68, 97, 115, 104, 59], &[226, 138, 171]),
        (&[38, 98, 108, 97, 99, 107, 116, 114, 105, 97, 110, 103, 108, 101, 114, 105, 103, 104, 116, 59], &[226, 150, 184]),
        (&[38, 81, 85, 79, 84], &[34]),
        (&[38, 103, 115, 99, 114, 59], &[226, 132, 138]),
        (&[38, 117, 103, 114, 97, 118, 101], &[195, 185]),
        (&[38, 79, 112, 101, 110, 67, 117, 114, 108, 121, 81, 117, 111, 116, 101, 59], &[226, 128, 152]),
        (&[38, 117, 97, 99, 117, 116, 101], &[195, 186]),
        (&[38, 108, 97, 103, 114, 97, 110, 59], &[226, 132, 146]),
        (&[38, 114, 111, 97, 114, 114, 59], &[226, 135, 190]),
        (&[38, 105, 110, 116, 59], &[226, 136, 171]),
        (&[38, 99, 105, 114, 102, 110, 105, 110, 116, 59], &[226, 168, 144]),
        (&[38, 78, 111, 116, 80, 114, 101, 99, 101, 100, 101, 115, 69, 113, 117, 97, 108, 59], &[226, 170, 175, 204, 184]),
        (&[38, 69, 84, 72], &[195, 144]),
        (&[38, 98, 111, 120, 118, 108, 59], &[226, 148, 164]),
        (&[38, 119, 101, 105, 101, 114, 112, 59], &[226, 132, 152]),
        (&[38, 83, 99, 97, 114, 111, 110, 59], &[197, 160]),
        (&[38, 100, 105, 97, 109, 115, 59], &[226, 153, 166]),
        (&[38, 116, 105, 109, 101, 115, 100, 59], &[226, 168, 176]),
        (&[38, 121, 102, 114, 59], &[240, 157, 148, 182]),
        (&[38, 76, 115, 99, 114, 59], &[226, 132, 146]),
        (&[38, 119, 111, 112, 102, 59], &[240, 157, 149, 168]),
        (&[38, 118, 115, 117, 98, 110, 101, 59], &[226, 138, 138, 239, 184, 128]),
        (&[38, 110, 119, 97, 114, 114, 59], &[226, 134, 150]),
        (&[38, 115, 116, 114, 97, 105, 103, 104, 116, 112, 104, 105, 59], &[207, 149]),
        (&[38, 110, 86, 68, 97, 115, 104, 59], &[226, 138, 175]),
        (&[38, 114, 112, 97, 114, 59], &[41]),
        (&[38, 71, 74, 99, 121, 59], &[208, 131]),
        (&[38, 99, 111, 112, 121, 115, 114, 59], &[226, 132, 151]),
        (&[38, 108, 111, 112, 102, 59], &[240, 157, 149, 157]),
        (&[38, 108, 116, 100, 111, 116, 59], &[226, 139, 150]),
        (&[38, 103, 98, 114, 101, 118, 101, 59], &[196, 159]),
        (&[38, 110, 118, 108, 116, 114, 105, 101, 59], &[226, 138, 180, 226, 131, 146]),
        (&[38, 116, 114, 112, 101, 122, 105, 117, 109, 59], &[226, 143, 162]),
        (&[38, 67, 111, 110, 105, 110, 116, 59], &[226, 136, 175]),
        (&[38, 117, 112, 115, 105, 108, 111, 110, 59], &[207, 133]),
        (&[38, 78, 111, 116, 67, 117, 112, 67, 97, 112, 59], &[226, 137, 173]),
        (&[38, 69, 100, 111, 116, 59], &[196, 150]),
        (&[38, 118, 97, 114, 115, 117, 98, 115, 101, 116, 110, 101, 113, 113, 59], &[226, 171, 139, 239, 184, 128]),
        (&[38, 97, 109, 112, 59], &[38]),
        (&[38, 78, 101, 103, 97, 116, 105, 118, 101, 77, 101, 100, 105, 117, 109, 83, 112, 97, 99, 101, 59], &[226, 128, 139]),
        (&[38, 84, 82, 65, 68, 69, 59], &[226, 132, 162]),
        (&[38, 109, 97, 112, 115, 116, 111, 108, 101, 102, 116, 59], &[226, 134, 164]),
        (&[38, 101, 99, 97, 114, 111, 110, 59], &[196, 155]),
        (&[38, 114, 111, 112, 102, 59], &[240, 157, 149, 163]),
        (&[38, 80, 102, 114, 59], &[240, 157, 148, 147]),
        (&[38, 110, 108, 101, 115, 115, 59], &[226, 137, 174]),
        (&[38, 111, 101, 108, 105, 103, 59], &[197, 147]),
        (&[38, 110, 118, 103, 116, 59], &[62, 226, 131, 146]),
        (&[38, 101, 112, 115, 105, 59], &[206, 181]),
        (&[38, 111, 103, 116, 59], &[226, 167, 129]),
        (&[38, 110, 115, 117, 99, 99, 101, 113, 59], &[226, 170, 176, 204, 184]),
        (&[38, 110, 112, 114, 101, 99, 59], &[226, 138, 128]),
        (&[38, 113, 117, 97, 116, 101, 114, 110, 105, 111, 110, 115, 59], &[226, 132, 141]),
        (&[38, 97, 99, 117, 116, 101], &[194, 180]),
        (&[38, 101, 110, 103, 59], &[197, 139]),
        (&[38, 81, 111, 112, 102, 59], &[226, 132, 154]),
        (&[38, 110, 103, 101, 113, 115, 108, 97, 110, 116, 59], &[226, 169, 190, 204, 184]),
        (&[38, 78, 111, 116, 76, 101, 115, 115, 69, 113, 117, 97, 108, 59], &[226, 137, 176]),
        (&[38, 110, 118, 97, 112, 59], &[226, 137, 141, 226, 131, 146]),
        (&[38, 73, 110, 116, 101, 103, 114, 97, 108, 59], &[226, 136, 171]),
        (&[38, 76, 97, 109, 98, 100, 97, 59], &[206, 155]),
        (&[38, 109, 111, 100, 101, 108, 115, 59], &[226, 138, 167]),
        (&[38, 65, 99, 121, 59], &[208, 144]),
        (&[38, 99, 117, 112, 100, 111, 116, 59], &[226, 138, 141]),
        (&[38, 115, 105, 109, 108, 69, 59], &[226, 170, 159]),
        (&[38, 78, 101, 119, 76, 105, 110, 101, 59], &[10]),
        (&[38, 115, 104, 121, 59], &[194, 173]),
        (&[38, 85, 112, 97, 114, 114, 111, 119, 59], &[226, 135, 145]),
        (&[38, 85, 112, 69, 113, 117, 105, 108, 105, 98, 114, 105, 117, 109, 59], &[226, 165, 174]),
        (&[38, 117, 108, 116, 114, 105, 59], &[226, 151, 184]),
        (&[38, 84, 115, 99, 114, 59], &[240, 157, 146, 175]),
        (&[38, 112, 101, 114, 105, 111, 100, 59], &[46]),
        (&[38, 102, 102, 108, 105, 103, 59], &[239, 172, 128]),
        (&[38, 112, 99, 121, 59], &[208, 191]),
        (&[38, 110, 118, 108, 101, 59], &[226, 137, 164, 226, 131, 146]),
        (&[38, 102, 111, 114, 107, 59], &[226, 139, 148]),
        (&[38, 115, 117, 99, 99, 110, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 186]),
        (&[38, 100, 105, 118, 111, 110, 120, 59], &[226, 139, 135]),
        (&[38, 101, 99, 105, 114, 59], &[226, 137, 150]),
        (&[38, 110, 71, 116, 59], &[226, 137, 171, 226, 131, 146]),
        (&[38, 78, 111, 116, 69, 108, 101, 109, 101, 110, 116, 59], &[226, 136, 137]),
        (&[38, 109, 117, 59], &[206, 188]),
        (&[38, 101, 103, 114, 97, 118, 101, 59], &[195, 168]),
        (&[38, 111, 116, 105, 109, 101, 115, 59], &[226, 138, 151]),
        (&[38, 101, 120, 105, 115, 116, 59], &[226, 136, 131]),
        (&[38, 108, 111, 110, 103, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 159, 181]),
        (&[38, 108, 102, 105, 115, 104, 116, 59], &[226, 165, 188]),
        (&[38, 115, 117, 98, 115, 117, 112, 59], &[226, 171, 147]),
        (&[38, 108, 97, 114, 114, 104, 107, 59], &[226, 134, 169]),
        (&[38, 101, 109, 112, 116, 121, 115, 101, 116, 59], &[226, 136, 133]),
        (&[38, 115, 114, 97, 114, 114, 59], &[226, 134, 146]),
        (&[38, 117, 98, 114, 101, 118, 101, 59], &[197, 173]),
        (&[38, 111, 99, 105, 114, 99, 59], &[195, 180]),
        (&[38, 102, 114, 97, 99, 49, 52], &[194, 188]),
        (&[38, 108, 100, 115, 104, 59], &[226, 134, 178]),
        (&[38, 71, 102, 114, 59], &[240, 157, 148, 138]),
        (&[38, 82, 105, 103, 104, 116, 84, 114, 105, 97, 110, 103, 108, 101, 59], &[226, 138, 179]),
        (&[38, 98, 117, 108, 108, 59], &[226, 128, 162]),
        (&[38, 114, 115, 99, 114, 59], &[240, 157, 147, 135]),
        (&[38, 65, 116, 105, 108, 100, 101, 59], &[195, 131]),
        (&[38, 99, 117, 100, 97, 114, 114, 114, 59], &[226, 164, 181]),
        (&[38, 105, 109, 111, 102, 59], &[226, 138, 183]),
        (&[38, 110, 118, 72, 97, 114, 114, 59], &[226, 164, 132]),
        (&[38, 115, 117, 112, 51, 59], &[194, 179]),
        (&[38, 117, 98, 114, 99, 121, 59], &[209, 158]),
        (&[38, 108, 97, 114, 114, 108, 112, 59], &[226, 134, 171]),
        (&[38, 103, 116, 114, 101, 113, 113, 108, 101, 115, 115, 59], &[226, 170, 140]),
        (&[38, 97, 112, 111, 115, 59], &[39]),
        (&[38, 104, 65, 114, 114, 59], &[226, 135, 148]),
        (&[38, 117, 112, 117, 112, 97, 114, 114, 111, 119, 115, 59], &[226, 135, 136]),
        (&[38, 97, 110, 100, 115, 108, 111, 112, 101, 59], &[226, 169, 152]),
        (&[38, 102, 114, 97, 99, 51, 53, 59], &[226, 133, 151]),
        (&[38, 120, 111, 100, 111, 116, 59], &[226, 168, 128]),
        (&[38, 76, 101, 102, 116, 68, 111, 117, 98, 108, 101, 66, 114, 97, 99, 107, 101, 116, 59], &[226, 159, 166]),
        (&[38, 73, 111, 116, 97, 59], &[206, 153]),
        (&[38, 111, 114, 100, 102], &[194, 170]),
        (&[38, 98, 105, 103, 116, 114, 105, 97, 110, 103, 108, 101, 100, 111, 119, 110, 59], &[226, 150, 189]),
        (&[38, 110, 118, 114, 116, 114, 105, 101, 59], &[226, 138, 181, 226, 131, 146]),
        (&[38, 97, 110, 100, 100, 59], &[226, 169, 156]),
        (&[38, 68, 97, 103, 103, 101, 114, 59], &[226, 128, 161]),
        (&[38, 111, 112, 101, 114, 112, 59], &[226, 166, 185]),
        (&[38, 65, 102, 114, 59], &[240, 157, 148, 132]),
        (&[38, 68, 74, 99, 121, 59], &[208, 130]),
        (&[38, 105, 111, 99, 121, 59], &[209, 145]),
        (&[38, 103, 110, 115, 105, 109, 59], &[226, 139, 167]),
        (&[38, 67, 111, 108, 111, 110, 59], &[226, 136, 183]),
        (&[38, 67, 101, 110, 116, 101, 114, 68, 111, 116, 59], &[194, 183]),
        (&[38, 115, 117, 112, 110, 69, 59], &[226, 171, 140]),
        (&[38, 110, 115, 117, 112, 69, 59], &[226, 171, 134, 204, 184]),
        (&[38, 118, 97, 114, 115, 117, 112, 115, 101, 116, 110, 101, 113, 113, 59], &[226, 171, 140, 239, 184, 128]),
        (&[38, 115, 117, 112, 115, 101, 116, 101, 113, 113, 59], &[226, 171, 134]),
        (&[38, 69, 103, 114, 97, 118, 101, 59], &[195, 136]),
        (&[38, 78, 111, 116, 84, 105, 108, 100, 101, 69, 113, 117, 97, 108, 59], &[226, 137, 132]),
        (&[38, 110, 103, 115, 105, 109, 59], &[226, 137, 181]),
        (&[38, 108, 101, 115, 115, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 133]),
        (&[38, 68, 111, 119, 110, 84, 101, 101, 65, 114, 114, 111, 119, 59], &[226, 134, 167]),
        (&[38, 100, 111, 116, 101, 113, 59], &[226, 137, 144]),
        (&[38, 104, 115, 116, 114, 111, 107, 59], &[196, 167]),
        (&[38, 65, 111, 112, 102, 59], &[240, 157, 148, 184]),
        (&[38, 107, 97, 112, 112, 97, 59], &[206, 186]),
        (&[38, 104, 101, 114, 99, 111, 110, 59], &[226, 138, 185]),
        (&[38, 118, 122, 105, 103, 122, 97, 103, 59], &[226, 166, 154]),
        (&[38, 99, 117, 101, 115, 99, 59], &[226, 139, 159]),
        (&[38, 112, 104, 105, 59], &[207, 134]),
        (&[38, 101, 117, 114, 111, 59], &[226, 130, 172]),
        (&[38, 115, 117, 112, 110, 101, 59], &[226, 138, 139]),
        (&[38, 98, 111, 120, 85, 82, 59], &[226, 149, 154]),
        (&[38, 115, 105, 109, 114, 97, 114, 114, 59], &[226, 165, 178]),
        (&[38, 101, 113, 115, 105, 109, 59], &[226, 137, 130]),
        (&[38, 110, 98, 117, 109, 112, 59], &[226, 137, 142, 204, 184]),
        (&[38, 84, 104, 105, 110, 83, 112, 97, 99, 101, 59], &[226, 128, 137]),
        (&[38, 79, 115, 99, 114, 59], &[240, 157, 146, 170]),
        (&[38, 108, 100, 114, 100, 104, 97, 114, 59], &[226, 165, 167]),
        (&[38, 109, 117, 108, 116, 105, 109, 97, 112, 59], &[226, 138, 184]),
        (&[38, 109, 104, 111, 59], &[226, 132, 167]),
        (&[38, 66, 115, 99, 114, 59], &[226, 132, 172]),
        (&[38, 99, 117, 112, 59], &[226, 136, 170]),
        (&[38, 103, 116, 114, 115, 105, 109, 59], &[226, 137, 179]),
        (&[38, 115, 117, 99, 99, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 184]),
        (&[38, 112, 114, 101, 59], &[226, 170, 175]),
        (&[38, 116, 114, 105, 115, 98, 59], &[226, 167, 141]),
        (&[38, 84, 72, 79, 82, 78], &[195, 158]),
        (&[38, 79, 118, 101, 114, 66, 114, 97, 99, 107, 101, 116, 59], &[226, 142, 180]),
        (&[38, 108, 116, 108, 97, 114, 114, 59], &[226, 165, 182]),
        (&[38, 98, 101, 109, 112, 116, 121, 118, 59], &[226, 166, 176]),
        (&[38, 85, 99, 121, 59], &[208, 163]),
        (&[38, 78, 111, 116, 78, 101, 115, 116, 101, 100, 71, 114, 101, 97, 116, 101, 114, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 170, 162, 204, 184]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 69, 113, 117, 97, 108, 76, 101, 115, 115, 59], &[226, 139, 155]),
        (&[38, 116, 99, 97, 114, 111, 110, 59], &[197, 165]),
        (&[38, 76, 101, 115, 115, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 169, 189]),
        (&[38, 116, 119, 105, 120, 116, 59], &[226, 137, 172]),
        (&[38, 101, 97, 99, 117, 116, 101], &[195, 169]),
        (&[38, 112, 114, 101, 99, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 183]),
        (&[38, 108, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 115, 59], &[226, 135, 134]),
        (&[38, 90, 102, 114, 59], &[226, 132, 168]),
        (&[38, 114, 105, 103, 104, 116, 108, 101, 102, 116, 97, 114, 114, 111, 119, 115, 59], &[226, 135, 132]),
        (&[38, 112, 108, 97, 110, 99, 107, 104, 59], &[226, 132, 142]),
        (&[38, 115, 109, 101, 112, 97, 114, 115, 108, 59], &[226, 167, 164]),
        (&[38, 117, 108, 99, 111, 114, 110, 101, 114, 59], &[226, 140, 156]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 99, 59], &[226, 166, 170]),
        (&[38, 79, 115, 108, 97, 115, 104], &[195, 152]),
        (&[38, 78, 111, 116, 80, 114, 101, 99, 101, 100, 101, 115, 59], &[226, 138, 128]),
        (&[38, 120, 111, 116, 105, 109, 101, 59], &[226, 168, 130]),
        (&[38, 115, 102, 114, 111, 119, 110, 59], &[226, 140, 162]),
        (&[38, 98, 108, 107, 49, 50, 59], &[226, 150, 146]),
        (&[38, 117, 116, 114, 105, 59], &[226, 150, 181]),
        (&[38, 108, 115, 104, 59], &[226, 134, 176]),
        (&[38, 114, 102, 114, 59], &[240, 157, 148, 175]),
        (&[38, 116, 111, 112, 99, 105, 114, 59], &[226, 171, 177]),
        (&[38, 100, 122, 99, 121, 59], &[209, 159]),
        (&[38, 108, 114, 104, 97, 114, 100, 59], &[226, 165, 173]),
        (&[38, 78, 111, 116, 83, 113, 117, 97, 114, 101, 83, 117, 98, 115, 101, 116, 59], &[226, 138, 143, 204, 184]),
        (&[38, 110, 108, 116, 59], &[226, 137, 174]),
        (&[38, 103, 100, 111, 116, 59], &[196, 161]),
        (&[38, 106, 117, 107, 99, 121, 59], &[209, 148]),
        (&[38, 112, 114, 101, 99, 99, 117, 114, 108, 121, 101, 113, 59], &[226, 137, 188]),
        (&[38, 108, 110, 97, 112, 59], &[226, 170, 137]),
        (&[38, 114, 114, 97, 114, 114, 59], &[226, 135, 137]),
        (&[38, 118, 97, 110, 103, 114, 116, 59], &[226, 166, 156]),
        (&[38, 98, 97, 114, 118, 101, 101, 59], &[226, 138, 189]),
        (&[38, 68, 111, 119, 110, 76, 101, 102, 116, 86, 101, 99, 116, 111, 114, 59], &[226, 134, 189]),
        (&[38, 100, 105, 97, 109, 111, 110, 100, 115, 117, 105, 116, 59], &[226, 153, 166]),
        (&[38, 67, 79, 80, 89], &[194, 169]),
        (&[38, 108, 111, 119, 97, 115, 116, 59], &[226, 136, 151]),
        (&[38, 101, 117, 109, 108, 59], &[195, 171]),
        (&[38, 68, 111, 117, 98, 108, 101, 82, 105, 103, 104, 116, 84, 101, 101, 59], &[226, 138, 168]),
        (&[38, 78, 111, 116, 83, 117, 112, 101, 114, 115, 101, 116, 59], &[226, 138, 131, 226, 131, 146]),
        (&[38, 115, 117, 98, 69, 59], &[226, 171, 133]),
        (&[38, 76, 101, 102, 116, 84, 114, 105, 97, 110, 103, 108, 101, 59], &[226, 138, 178]),
        (&[38, 77, 105, 110, 117, 115, 80, 108, 117, 115, 59], &[226, 136, 147]),
        (&[38, 101, 109, 112, 116, 121, 118, 59], &[226, 136, 133]),
        (&[38, 67, 108, 111, 115, 101, 67, 117, 114, 108, 121, 68, 111, 117, 98, 108, 101, 81, 117, 111, 116, 101, 59], &[226, 128, 157]),
        (&[38, 102, 114, 97, 99, 50, 51, 59], &[226, 133, 148]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 169, 190]),
        (&[38, 115, 119, 97, 114, 114, 111, 119, 59], &[226, 134, 153]),
        (&[38, 99, 111, 108, 111, 110, 101, 113, 59], &[226, 137, 148]),
        (&[38, 115, 117, 112, 115, 101, 116, 101, 113, 59], &[226, 138, 135]),
        (&[38, 106, 99, 121, 59], &[208, 185]),
        (&[38, 114, 97, 101, 109, 112, 116, 121, 118, 59], &[226, 166, 179]),
        (&[38, 99, 108, 117, 98, 115, 117, 105, 116, 59], &[226, 153, 163]),
        (&[38, 102, 114, 97, 99, 50, 53, 59], &[226, 133, 150]),
        (&[38, 115, 117, 112, 115, 101, 116, 110, 101, 113, 113, 59], &[226, 171, 140]),
        (&[38, 84, 114, 105, 112, 108, 101, 68, 111, 116, 59], &[226, 131, 155]),
        (&[38, 74, 117, 107, 99, 121, 59], &[208, 132]),
        (&[38, 116, 104, 105, 99, 107, 97, 112, 112, 114, 111, 120, 59], &[226, 137, 136]),
        (&[38, 112, 114, 111, 112, 116, 111, 59], &[226, 136, 157]),
        (&[38, 84, 97, 98, 59], &[9]),
        (&[38, 108, 115, 105, 109, 103, 59], &[226, 170, 143]),
        (&[38, 76, 84], &[60]),
        (&[38, 120, 108, 65, 114, 114, 59], &[226, 159, 184]),
        (&[38, 97, 110, 103, 114, 116, 59], &[226, 136, 159]),
        (&[38, 105, 106, 108, 105, 103, 59], &[196, 179]),
        (&[38, 120, 119, 101, 100, 103, 101, 59], &[226, 139, 128]),
        (&[38, 111, 104, 109, 59], &[206, 169]),
        (&[38, 67, 117, 112, 67, 97, 112, 59], &[226, 137, 141]),
        (&[38, 85, 109, 97, 99, 114, 59], &[197, 170]),
        (&[38, 97, 99, 117, 116, 101, 59], &[194, 180]),
        (&[38, 77, 102, 114, 59], &[240, 157, 148, 144]),
        (&[38, 107, 104, 99, 121, 59], &[209, 133]),
        (&[38, 99, 117, 112, 99, 117, 112, 59], &[226, 169, 138]),
        (&[38, 80, 114, 101, 99, 101, 100, 101, 115, 59], &[226, 137, 186]),
        (&[38, 65, 69, 108, 105, 103], &[195, 134]),
        (&[38, 109, 97, 112, 115, 116, 111, 100, 111, 119, 110, 59], &[226, 134, 167]),
        (&[38, 115, 99, 105, 114, 99, 59], &[197, 157]),
        (&[38, 120, 114, 65, 114, 114, 59], &[226, 159, 185]),
        (&[38, 75, 72, 99, 121, 59], &[208, 165]),
        (&[38, 65, 108, 112, 104, 97, 59], &[206, 145]),
        (&[38, 112, 105, 116, 99, 104, 102, 111, 114, 107, 59], &[226, 139, 148]),
        (&[38, 105, 111, 103, 111, 110, 59], &[196, 175]),
        (&[38, 114, 65, 116, 97, 105, 108, 59], &[226, 164, 156]),
        (&[38, 102, 99, 121, 59], &[209, 132]),
        (&[38, 99, 99, 97, 114, 111, 110, 59], &[196, 141]),
        (&[38, 105, 109, 97, 99, 114, 59], &[196, 171]),
        (&[38, 73, 117, 109, 108], &[195, 143]),
        (&[38, 99, 117, 114, 108, 121, 118, 101, 101, 59], &[226, 139, 142]),
        (&[38, 111, 114, 100, 59], &[226, 169, 157]),
        (&[38, 68, 111, 117, 98, 108, 101, 86, 101, 114, 116, 105, 99, 97, 108, 66, 97, 114, 59], &[226, 136, 165]),
        (&[38, 107, 97, 112, 112, 97, 118, 59], &[207, 176]),
        (&[38, 115, 105, 103, 109, 97, 102, 59], &[207, 130]),
        (&[38, 70, 111, 112, 102, 59], &[240, 157, 148, 189]),
        (&[38, 85, 112, 115, 105, 108, 111, 110, 59], &[206, 165]),
        (&[38, 69, 113, 117, 97, 108, 59], &[226, 169, 181]),
        (&[38, 110, 118, 108, 65, 114, 114, 59], &[226, 164, 130]),
        (&[38, 108, 111, 111, 112, 97, 114, 114, 111, 119, 108, 101, 102, 116, 59], &[226, 134, 171]),
        (&[38, 76, 101, 102, 116, 86, 101, 99, 116, 111, 114, 59], &[226, 134, 188]),
        (&[38, 105, 115, 105, 110, 100, 111, 116, 59], &[226, 139, 181]),
        (&[38, 105, 105, 105, 105, 110, 116, 59], &[226, 168, 140]),
        (&[38, 68, 111, 119, 110, 76, 101, 102, 116, 82, 105, 103, 104, 116, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 144]),
        (&[38, 110, 108, 101, 115, 59], &[226, 169, 189, 204, 184]),
        (&[38, 112, 111, 112, 102, 59], &[240, 157, 149, 161]),
        (&[38, 85, 115, 99, 114, 59], &[240, 157, 146, 176]),
        (&[38, 71, 99, 121, 59], &[208, 147]),
        (&[38, 116, 112, 114, 105, 109, 101, 59], &[226, 128, 180]),
        (&[38, 108, 97, 114, 114, 98, 102, 115, 59], &[226, 164, 159]),
        (&[38, 110, 108, 116, 114, 105, 101, 59], &[226, 139, 172]),
        (&[38, 70, 111, 114, 65, 108, 108, 59], &[226, 136, 128]),
        (&[38, 111, 111, 112, 102, 59], &[240, 157, 149, 160]),
        (&[38, 114, 105, 103, 104, 116, 115, 113, 117, 105, 103, 97, 114, 114, 111, 119, 59], &[226, 134, 157]),
        (&[38, 121, 117, 109, 108], &[195, 191]),
        (&[38, 110, 115, 99, 114, 59], &[240, 157, 147, 131]),
        (&[38, 115, 99, 110, 69, 59], &[226, 170, 182]),
        (&[38, 101, 113, 115, 108, 97, 110, 116, 103, 116, 114, 59], &[226, 170, 150]),
        (&[38, 75, 74, 99, 121, 59], &[208, 140]),
        (&[38, 115, 101, 99, 116, 59], &[194, 167]),
        (&[38, 110, 119, 97, 114, 104, 107, 59], &[226, 164, 163]),
        (&[38, 115, 113, 115, 117, 112, 115, 101, 116, 101, 113, 59], &[226, 138, 146]),
        (&[38, 68, 115, 116, 114, 111, 107, 59], &[196, 144]),
        (&[38, 85, 112, 112, 101, 114, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 150]),
        (&[38, 82, 101, 118, 101, 114, 115, 101, 69, 108, 101, 109, 101, 110, 116, 59], &[226, 136, 139]),
        (&[38, 115, 113, 115, 117, 112, 101, 59], &[226, 138, 146]),
        (&[38, 111, 114, 97, 114, 114, 59], &[226, 134, 187]),
        (&[38, 77, 97, 112, 59], &[226, 164, 133]),
        (&[38, 99, 97, 112, 99, 97, 112, 59], &[226, 169, 139]),
        (&[38, 80, 114, 101, 99, 101, 100, 101, 115, 69, 113, 117, 97, 108, 59], &[226, 170, 175]),
        (&[38, 110, 119, 97, 114, 114, 111, 119, 59], &[226, 134, 150]),
        (&[38, 86, 115, 99, 114, 59], &[240, 157, 146, 177]),
        (&[38, 112, 105, 59], &[207, 128]),
        (&[38, 65, 99, 105, 114, 99, 59], &[195, 130]),
        (&[38, 109, 117, 109, 97, 112, 59], &[226, 138, 184]),
        (&[38, 108, 97, 116, 101, 59], &[226, 170, 173]),
        (&[38, 110, 97, 99, 117, 116, 101, 59], &[197, 132]),
        (&[38, 73, 109, 112, 108, 105, 101, 115, 59], &[226, 135, 146]),
        (&[38, 97, 112, 101, 59], &[226, 137, 138]),
        (&[38, 108, 97, 113, 117, 111, 59], &[194, 171]),
        (&[38, 114, 110, 109, 105, 100, 59], &[226, 171, 174]),
        (&[38, 76, 97, 112, 108, 97, 99, 101, 116, 114, 102, 59], &[226, 132, 146]),
        (&[38, 116, 115, 99, 114, 59], &[240, 157, 147, 137]),
        (&[38, 108, 97, 114, 114, 59], &[226, 134, 144]),
        (&[38, 82, 105, 103, 104, 116, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 155]),
        (&[38, 108, 101, 115, 115, 101, 113, 113, 103, 116, 114, 59], &[226, 170, 139]),
        (&[38, 105, 115, 105, 110, 69, 59], &[226, 139, 185]),
        (&[38, 115, 99, 59], &[226, 137, 187]),
        (&[38, 111, 103, 114, 97, 118, 101, 59], &[195, 178]),
        (&[38, 119, 114, 59], &[226, 137, 128]),
        (&[38, 110, 116, 114, 105, 97, 110, 103, 108, 101, 114, 105, 103, 104, 116, 101, 113, 59], &[226, 139, 173]),
        (&[38, 71, 111, 112, 102, 59], &[240, 157, 148, 190]),
        (&[38, 68, 99, 97, 114, 111, 110, 59], &[196, 142]),
        (&[38, 74, 111, 112, 102, 59], &[240, 157, 149, 129]),
        (&[38, 110, 116, 105, 108, 100, 101], &[195, 177]),
        (&[38, 82, 105, 103, 104, 116, 65, 110, 103, 108, 101, 66, 114, 97, 99, 107, 101, 116, 59], &[226, 159, 169]),
        (&[38, 115, 116, 97, 114, 102, 59], &[226, 152, 133]),
        (&[38, 72, 111, 112, 102, 59], &[226, 132, 141]),
        (&[38, 97, 110, 103, 101, 59], &[226, 166, 164]),
        (&[38, 114, 111, 116, 105, 109, 101, 115, 59], &[226, 168, 181]),
        (&[38, 114, 97, 110, 103, 101, 59], &[226, 166, 165]),
        (&[38, 114, 108, 109, 59], &[226, 128, 143]),
        (&[38, 65, 117, 109, 108, 59], &[195, 132]),
        (&[38, 103, 69, 59], &[226, 137, 167]),
        (&[38, 79, 116, 105, 109, 101, 115, 59], &[226, 168, 183]),
        (&[38, 113, 111, 112, 102, 59], &[240, 157, 149, 162]),
        (&[38, 97, 103, 114, 97, 118, 101, 59], &[195, 160]),
        (&[38, 118, 101, 108, 108, 105, 112, 59], &[226, 139, 174]),
        (&[38, 115, 104, 99, 104, 99, 121, 59], &[209, 137]),
        (&[38, 106, 109, 97, 116, 104, 59], &[200, 183]),
        (&[38, 101, 116, 104, 59], &[195, 176]),
        (&[38, 117, 117, 109, 108, 59], &[195, 188]),
        (&[38, 82, 105, 103, 104, 116, 70, 108, 111, 111, 114, 59], &[226, 140, 139]),
        (&[38, 116, 114, 97, 100, 101, 59], &[226, 132, 162]),
        (&[38, 67, 104, 105, 59], &[206, 167]),
        (&[38, 99, 104, 105, 59], &[207, 135]),
        (&[38, 98, 111, 120, 100, 82, 59], &[226, 149, 146]),
        (&[38, 116, 111, 115, 97, 59], &[226, 164, 169]),
        (&[38, 80, 115, 105, 59], &[206, 168]),
        (&[38, 78, 111, 116, 76, 101, 115, 115, 76, 101, 115, 115, 59], &[226, 137, 170, 204, 184]),
        (&[38, 116, 104, 101, 116, 97, 118, 59], &[207, 145]),
        (&[38, 76, 101, 102, 116, 70, 108, 111, 111, 114, 59], &[226, 140, 138]),
        (&[38, 116, 104, 111, 114, 110], &[195, 190]),
        (&[38, 102, 114, 97, 99, 49, 50], &[194, 189]),
        (&[38, 85, 98, 114, 101, 118, 101, 59], &[197, 172]),
        (&[38, 121, 101, 110, 59], &[194, 165]),
        (&[38, 79, 99, 121, 59], &[208, 158]),
        (&[38, 98, 111, 120, 86, 82, 59], &[226, 149, 160]),
        (&[38, 85, 116, 105, 108, 100, 101, 59], &[197, 168]),
        (&[38, 98, 111, 119, 116, 105, 101, 59], &[226, 139, 136]),
        (&[38, 115, 99, 97, 112, 59], &[226, 170, 184]),
        (&[38, 109, 105, 100, 97, 115, 116, 59], &[42]),
        (&[38, 108, 97, 116, 97, 105, 108, 59], &[226, 164, 153]),
        (&[38, 108, 111, 122, 102, 59], &[226, 167, 171]),
        (&[38, 102, 102, 105, 108, 105, 103, 59], &[239, 172, 131]),
        (&[38, 110, 103, 116, 114, 59], &[226, 137, 175]),
        (&[38, 110, 97, 112, 69, 59], &[226, 169, 176, 204, 184]),
        (&[38, 78, 111, 116, 84, 105, 108, 100, 101, 70, 117, 108, 108, 69, 113, 117, 97, 108, 59], &[226, 137, 135]),
        (&[38, 76, 101, 102, 116, 85, 112, 68, 111, 119, 110, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 145]),
        (&[38, 117, 116, 100, 111, 116, 59], &[226, 139, 176]),
        (&[38, 103, 101, 115, 108, 101, 115, 59], &[226, 170, 148]),
        (&[38, 118, 115, 117, 112, 110, 101, 59], &[226, 138, 139, 239, 184, 128]),
        (&[38, 99, 105, 114, 99, 108, 101, 100, 83, 59], &[226, 147, 136]),
        (&[38, 82, 105, 103, 104, 116, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 147]),
        (&[38, 115, 117, 98, 101, 100, 111, 116, 59], &[226, 171, 131]),
        (&[38, 108, 114, 104, 97, 114, 59], &[226, 135, 139]),
        (&[38, 100, 105, 97, 109, 59], &[226, 139, 132]),
        (&[38, 102, 105, 108, 105, 103, 59], &[239, 172, 129]),
        (&[38, 111, 108, 99, 114, 111, 115, 115, 59], &[226, 166, 187]),
        (&[38, 99, 111, 109, 109, 97, 116, 59], &[64]),
        (&[38, 118, 97, 114, 112, 105, 59], &[207, 150]),
        (&[38, 108, 99, 97, 114, 111, 110, 59], &[196, 190]),
        (&[38, 108, 104, 98, 108, 107, 59], &[226, 150, 132]),
        (&[38, 110, 112, 114, 101, 99, 101, 113, 59], &[226, 170, 175, 204, 184]),
        (&[38, 100, 104, 97, 114, 114, 59], &[226, 135, 130]),
        (&[38, 99, 119, 99, 111, 110, 105, 110, 116, 59], &[226, 136, 178]),
        (&[38, 89, 97, 99, 117, 116, 101, 59], &[195, 157]),
        (&[38, 99, 111, 110, 103, 100, 111, 116, 59], &[226, 169, 173]),
        (&[38, 120, 99, 97, 112, 59], &[226, 139, 130]),
        (&[38, 108, 103, 69, 59], &[226, 170, 145]),
        (&[38, 83, 117, 112, 115, 101, 116, 59], &[226, 139, 145]),
        (&[38, 83, 113, 117, 97, 114, 101, 83, 117, 98, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 138, 145]),
        (&[38, 104, 97, 114, 114, 119, 59], &[226, 134, 173]),
        (&[38, 101, 112, 108, 117, 115, 59], &[226, 169, 177]),
        (&[38, 105, 110, 116, 101, 103, 101, 114, 115, 59], &[226, 132, 164]),
        (&[38, 109, 105, 100, 100, 111, 116], &[194, 183]),
        (&[38, 102, 114, 97, 99, 51, 52, 59], &[194, 190]),
        (&[38, 69, 78, 71, 59], &[197, 138]),
        (&[38, 76, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 148]),
        (&[38, 116, 101, 108, 114, 101, 99, 59], &[226, 140, 149]),
        (&[38, 109, 97, 108, 116, 101, 115, 101, 59], &[226, 156, 160]),
        (&[38, 101, 113, 117, 105, 118, 59], &[226, 137, 161]),
        (&[38, 99, 117, 112, 115, 59], &[226, 136, 170, 239, 184, 128]),
        (&[38, 99, 108, 117, 98, 115, 59], &[226, 153, 163]),
        (&[38, 112, 108, 97, 110, 107, 118, 59], &[226, 132, 143]),
        (&[38, 108, 116, 99, 105, 114, 59], &[226, 169, 185]),
        (&[38, 99, 111, 112, 121, 59], &[194, 169]),
        (&[38, 98, 108, 97, 99, 107, 116, 114, 105, 97, 110, 103, 108, 101, 108, 101, 102, 116, 59], &[226, 151, 130]),
        (&[38, 114, 97, 114, 114, 104, 107, 59], &[226, 134, 170]),
        (&[38, 84, 104, 101, 116, 97, 59], &[206, 152]),
        (&[38, 105, 110, 116, 108, 97, 114, 104, 107, 59], &[226, 168, 151]),
        (&[38, 68, 97, 114, 114, 59], &[226, 134, 161]),
        (&[38, 115, 117, 112, 50], &[194, 178]),
        (&[38, 78, 111, 110, 66, 114, 101, 97, 107, 105, 110, 103, 83, 112, 97, 99, 101, 59], &[194, 160]),
        (&[38, 70, 111, 117, 114, 105, 101, 114, 116, 114, 102, 59], &[226, 132, 177]),
        (&[38, 109, 105, 99, 114, 111], &[194, 181]),
        (&[38, 106, 99, 105, 114, 99, 59], &[196, 181]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 113, 59], &[226, 137, 156]),
        (&[38, 98, 111, 120, 72, 100, 59], &[226, 149, 164]),
        (&[38, 108, 104, 97, 114, 117, 108, 59], &[226, 165, 170]),
        (&[38, 102, 111, 114, 97, 108, 108, 59], &[226, 136, 128]),
        (&[38, 117, 117, 109, 108], &[195, 188]),
        (&[38, 82, 105, 103, 104, 116, 67, 101, 105, 108, 105, 110, 103, 59], &[226, 140, 137]),
        (&[38, 79, 118, 101, 114, 66, 97, 114, 59], &[226, 128, 190]),
        (&[38, 108, 114, 97, 114, 114, 59], &[226, 135, 134]),
        (&[38, 99, 117, 114, 108, 121, 101, 113, 115, 117, 99, 99, 59], &[226, 139, 159]),
        (&[38, 115, 108, 97, 114, 114, 59], &[226, 134, 144]),
        (&[38, 115, 101, 99, 116], &[194, 167]),
        (&[38, 102, 114, 111, 119, 110, 59], &[226, 140, 162]),
        (&[38, 79, 103, 114, 97, 118, 101], &[195, 146]),
        (&[38, 81, 85, 79, 84, 59], &[34]),
        (&[38, 115, 117, 98, 115, 105, 109, 59], &[226, 171, 135]),
        (&[38, 118, 108, 116, 114, 105, 59], &[226, 138, 178]),
        (&[38, 98, 114, 118, 98, 97, 114], &[194, 166]),
        (&[38, 68, 68, 59], &[226, 133, 133]),
        (&[38, 115, 101, 109, 105, 59], &[59]),
        (&[38, 65, 110, 100, 59], &[226, 169, 147]),
        (&[38, 104, 107, 115, 119, 97, 114, 111, 119, 59], &[226, 164, 166]),
        (&[38, 82, 105, 103, 104, 116, 84, 114, 105, 97, 110, 103, 108, 101, 66, 97, 114, 59], &[226, 167, 144]),
        (&[38, 108, 114, 109, 59], &[226, 128, 142]),
        (&[38, 120, 99, 105, 114, 99, 59], &[226, 151, 175]),
        (&[38, 110, 115, 99, 59], &[226, 138, 129]),
        (&[38, 99, 105, 114, 99, 108, 101, 100, 97, 115, 116, 59], &[226, 138, 155]),
        (&[38, 82, 99, 101, 100, 105, 108, 59], &[197, 150]),
        (&[38, 84, 105, 108, 100, 101, 59], &[226, 136, 188]),
        (&[38, 85, 117, 109, 108], &[195, 156]),
        (&[38, 100, 97, 108, 101, 116, 104, 59], &[226, 132, 184]),
        (&[38, 117, 104, 98, 108, 107, 59], &[226, 150, 128]),
        (&[38, 101, 113, 115, 108, 97, 110, 116, 108, 101, 115, 115, 59], &[226, 170, 149]),
        (&[38, 85, 111, 103, 111, 110, 59], &[197, 178]),
        (&[38, 99, 99, 105, 114, 99, 59], &[196, 137]),
        (&[38, 83, 115, 99, 114, 59], &[240, 157, 146, 174]),
        (&[38, 110, 115, 117, 98, 59], &[226, 138, 132]),
        (&[38, 111, 114, 111, 114, 59], &[226, 169, 150]),
        (&[38, 69, 115, 105, 109, 59], &[226, 169, 179]),
        (&[38, 108, 65, 97, 114, 114, 59], &[226, 135, 154]),
        (&[38, 115, 115, 109, 105, 108, 101, 59], &[226, 140, 163]),
        (&[38, 118, 99, 121, 59], &[208, 178]),
        (&[38, 98, 105, 103, 111, 116, 105, 109, 101, 115, 59], &[226, 168, 130]),
        (&[38, 79, 69, 108, 105, 103, 59], &[197, 146]),
        (&[38, 84, 105, 108, 100, 101, 70, 117, 108, 108, 69, 113, 117, 97, 108, 59], &[226, 137, 133]),
        (&[38, 114, 115, 113, 98, 59], &[93]),
        (&[38, 115, 98, 113, 117, 111, 59], &[226, 128, 154]),
        (&[38, 66, 101, 116, 97, 59], &[206, 146]),
        (&[38, 101, 114, 68, 111, 116, 59], &[226, 137, 147]),
        (&[38, 73, 111, 103, 111, 110, 59], &[196, 174]),
        (&[38, 101, 108, 59], &[226, 170, 153]),
        (&[38, 104, 99, 105, 114, 99, 59], &[196, 165]),
        (&[38, 115, 113, 99, 97, 112, 115, 59], &[226, 138, 147, 239, 184, 128]),
        (&[38, 114, 97, 110, 103, 108, 101, 59], &[226, 159, 169]),
        (&[38, 114, 102, 105, 115, 104, 116, 59], &[226, 165, 189]),
        (&[38, 78, 111, 116, 69, 113, 117, 97, 108, 84, 105, 108, 100, 101, 59], &[226, 137, 130, 204, 184]),
        (&[38, 115, 104, 99, 121, 59], &[209, 136]),
        (&[38, 83, 104, 111, 114, 116, 85, 112, 65, 114, 114, 111, 119, 59], &[226, 134, 145]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 137, 171, 204, 184]),
        (&[38, 117, 99, 105, 114, 99, 59], &[195, 187]),
        (&[38, 99, 111, 109, 112, 102, 110, 59], &[226, 136, 152]),
        (&[38, 69, 97, 99, 117, 116, 101], &[195, 137]),
        (&[38, 101, 97, 99, 117, 116, 101, 59], &[195, 169]),
        (&[38, 83, 79, 70, 84, 99, 121, 59], &[208, 172]),
        (&[38, 101, 120, 112, 101, 99, 116, 97, 116, 105, 111, 110, 59], &[226, 132, 176]),
        (&[38, 117, 104, 97, 114, 108, 59], &[226, 134, 191]),
        (&[38, 108, 101, 115, 100, 111, 116, 111, 114, 59], &[226, 170, 131]),
        (&[38, 99, 105, 114, 115, 99, 105, 114, 59], &[226, 167, 130]),
        (&[38, 78, 111, 116, 76, 101, 102, 116, 84, 114, 105, 97, 110, 103, 108, 101, 59], &[226, 139, 170]),
        (&[38, 99, 116, 100, 111, 116, 59], &[226, 139, 175]),
        (&[38, 79, 109, 105, 99, 114, 111, 110, 59], &[206, 159]),
        (&[38, 101, 111, 103, 111, 110, 59], &[196, 153]),
        (&[38, 83, 104, 111, 114, 116, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 144]),
        (&[38, 118, 101, 101, 59], &[226, 136, 168]),
        (&[38, 109, 97, 108, 101, 59], &[226, 153, 130]),
        (&[38, 101, 109, 115, 112, 59], &[226, 128, 131]),
        (&[38, 82, 105, 103, 104, 116, 85, 112, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 156]),
        (&[38, 122, 111, 112, 102, 59], &[240, 157, 149, 171]),
        (&[38, 110, 71, 116, 118, 59], &[226, 137, 171, 204, 184]),
        (&[38, 116, 105, 109, 101, 115, 98, 59], &[226, 138, 160]),
        (&[38, 97, 115, 121, 109, 112, 59], &[226, 137, 136]),
        (&[38, 110, 99, 111, 110, 103, 59], &[226, 137, 135]),
        (&[38, 99, 97, 112, 97, 110, 100, 59], &[226, 169, 132]),
        (&[38, 99, 115, 117, 98, 101, 59], &[226, 171, 145]),
        (&[38, 98, 111, 116, 59], &[226, 138, 165]),
        (&[38, 98, 101, 99, 97, 117, 115, 101, 59], &[226, 136, 181]),
        (&[38, 82, 101, 118, 101, 114, 115, 101, 85, 112, 69, 113, 117, 105, 108, 105, 98, 114, 105, 117, 109, 59], &[226, 165, 175]),
        (&[38, 112, 117, 110, 99, 115, 112, 59], &[226, 128, 136]),
        (&[38, 66, 101, 114, 110, 111, 117, 108, 108, 105, 115, 59], &[226, 132, 172]),
        (&[38, 97, 112, 97, 99, 105, 114, 59], &[226, 169, 175]),
        (&[38, 114, 116, 114, 105, 59], &[226, 150, 185]),
        (&[38, 115, 117, 112, 115, 105, 109, 59], &[226, 171, 136]),
        (&[38, 72, 102, 114, 59], &[226, 132, 140]),
        (&[38, 65, 69, 108, 105, 103, 59], &[195, 134]),
        (&[38, 69, 99, 97, 114, 111, 110, 59], &[196, 154]),
        (&[38, 115, 104, 121], &[194, 173]),
        (&[38, 83, 117, 112, 101, 114, 115, 101, 116, 59], &[226, 138, 131]),
        (&[38, 116, 119, 111, 104, 101, 97, 100, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 158]),
        (&[38, 82, 115, 104, 59], &[226, 134, 177]),
        (&[38, 115, 104, 97, 114, 112, 59], &[226, 153, 175]),
        (&[38, 115, 113, 115, 117, 112, 115, 101, 116, 59], &[226, 138, 144]),
        (&[38, 115, 117, 112, 104, 115, 117, 98, 59], &[226, 171, 151]),
        (&[38, 111, 114, 115, 108, 111, 112, 101, 59], &[226, 169, 151]),
        (&[38, 78, 111, 116, 67, 111, 110, 103, 114, 117, 101, 110, 116, 59], &[226, 137, 162]),
        (&[38, 108, 116, 104, 114, 101, 101, 59], &[226, 139, 139]),
        (&[38, 79, 114, 59], &[226, 169, 148]),
        (&[38, 90, 97, 99, 117, 116, 101, 59], &[197, 185]),
        (&[38, 118, 97, 114, 107, 97, 112, 112, 97, 59], &[207, 176]),
        (&[38, 78, 116, 105, 108, 100, 101, 59], &[195, 145]),
        (&[38, 76, 101, 102, 116, 68, 111, 119, 110, 86, 101, 99, 116, 111, 114, 59], &[226, 135, 131]),
        (&[38, 108, 97, 116, 101, 115, 59], &[226, 170, 173, 239, 184, 128]),
        (&[38, 82, 99, 121, 59], &[208, 160]),
        (&[38, 111, 116, 105, 108, 100, 101], &[195, 181]),
        (&[38, 110, 98, 117, 109, 112, 101, 59], &[226, 137, 143, 204, 184]),
        (&[38, 114, 105, 110, 103, 59], &[203, 154]),
        (&[38, 98, 111, 120, 104, 100, 59], &[226, 148, 172]),
        (&[38, 83, 113, 117, 97, 114, 101, 83, 117, 112, 101, 114, 115, 101, 116, 59], &[226, 138, 144]),
        (&[38, 119, 101, 100, 98, 97, 114, 59], &[226, 169, 159]),
        (&[38, 108, 101, 113, 59], &[226, 137, 164]),
        (&[38, 67, 99, 97, 114, 111, 110, 59], &[196, 140]),
        (&[38, 99, 99, 101, 100, 105, 108, 59], &[195, 167]),
        (&[38, 114, 97, 100, 105, 99, 59], &[226, 136, 154]),
        (&[38, 86, 100, 97, 115, 104, 59], &[226, 138, 169]),
        (&[38, 76, 101, 102, 116, 85, 112, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 160]),
        (&[38, 108, 115, 97, 113, 117, 111, 59], &[226, 128, 185]),
        (&[38, 117, 117, 97, 114, 114, 59], &[226, 135, 136]),
        (&[38, 67, 105, 114, 99, 108, 101, 68, 111, 116, 59], &[226, 138, 153]),
        (&[38, 83, 109, 97, 108, 108, 67, 105, 114, 99, 108, 101, 59], &[226, 136, 152]),
        (&[38, 98, 105, 103, 99, 97, 112, 59], &[226, 139, 130]),
        (&[38, 118, 101, 101, 101, 113, 59], &[226, 137, 154]),
        (&[38, 98, 100, 113, 117, 111, 59], &[226, 128, 158]),
        (&[38, 67, 105, 114, 99, 108, 101, 80, 108, 117, 115, 59], &[226, 138, 149]),
        (&[38, 104, 101, 97, 114, 116, 115, 59], &[226, 153, 165]),
        (&[38, 115, 99, 99, 117, 101, 59], &[226, 137, 189]),
        (&[38, 98, 114, 118, 98, 97, 114, 59], &[194, 166]),
        (&[38, 116, 111, 112, 102, 111, 114, 107, 59], &[226, 171, 154]),
        (&[38, 114, 112, 112, 111, 108, 105, 110, 116, 59], &[226, 168, 146]),
        (&[38, 90, 115, 99, 114, 59], &[240, 157, 146, 181]),
        (&[38, 117, 114, 99, 111, 114, 110, 59], &[226, 140, 157]),
        (&[38, 110, 111, 116, 105, 110, 59], &[226, 136, 137]),
        (&[38, 112, 109, 59], &[194, 177]),
        (&[38, 73, 74, 108, 105, 103, 59], &[196, 178]),
        (&[38, 103, 101, 115, 99, 99, 59], &[226, 170, 169]),
        (&[38, 101, 97, 115, 116, 101, 114, 59], &[226, 169, 174]),
        (&[38, 79, 102, 114, 59], &[240, 157, 148, 146]),
        (&[38, 113, 115, 99, 114, 59], &[240, 157, 147, 134]),
        (&[38, 110, 118, 103, 101, 59], &[226, 137, 165, 226, 131, 146]),
        (&[38, 98, 115, 99, 114, 59], &[240, 157, 146, 183]),
        (&[38, 98, 111, 120, 117, 82, 59], &[226, 149, 152]),
        (&[38, 103, 116, 100, 111, 116, 59], &[226, 139, 151]),
        (&[38, 73, 99, 105, 114, 99], &[195, 142]),
        (&[38, 78, 111, 116, 59], &[226, 171, 172]),
        (&[38, 100, 97, 103, 103, 101, 114, 59], &[226, 128, 160]),
        (&[38, 114, 100, 113, 117, 111, 114, 59], &[226, 128, 157]),
        (&[38, 101, 108, 105, 110, 116, 101, 114, 115, 59], &[226, 143, 167]),
        (&[38, 98, 97, 114, 119, 101, 100, 59], &[226, 140, 133]),
        (&[38, 79, 109, 101, 103, 97, 59], &[206, 169]),
        (&[38, 98, 111, 120, 85, 76, 59], &[226, 149, 157]),
        (&[38, 69, 109, 112, 116, 121, 86, 101, 114, 121, 83, 109, 97, 108, 108, 83, 113, 117, 97, 114, 101, 59], &[226, 150, 171]),
        (&[38, 99, 97, 112, 98, 114, 99, 117, 112, 59], &[226, 169, 137]),
        (&[38, 87, 101, 100, 103, 101, 59], &[226, 139, 128]),
        (&[38, 112, 105, 118, 59], &[207, 150]),
        (&[38, 110, 114, 116, 114, 105, 59], &[226, 139, 171]),
        (&[38, 100, 105, 115, 105, 110, 59], &[226, 139, 178]),
        (&[38, 68, 111, 117, 98, 108, 101, 76, 111, 110, 103, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 159, 185]),
        (&[38, 115, 105, 109, 101, 113, 59], &[226, 137, 131]),
        (&[38, 115, 119, 97, 114, 114, 59], &[226, 134, 153]),
        (&[38, 115, 109, 105, 100, 59], &[226, 136, 163]),
        (&[38, 99, 117, 108, 97, 114, 114, 112, 59], &[226, 164, 189]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 70, 117, 108, 108, 69, 113, 117, 97, 108, 59], &[226, 137, 167, 204, 184]),
        (&[38, 73, 69, 99, 121, 59], &[208, 149]),
        (&[38, 109, 97, 108, 116, 59], &[226, 156, 160]),
        (&[38, 108, 97, 114, 114, 116, 108, 59], &[226, 134, 162]),
        (&[38, 100, 111, 116, 101, 113, 100, 111, 116, 59], &[226, 137, 145]),
        (&[38, 98, 111, 120, 72, 59], &[226, 149, 144]),
        (&[38, 86, 101, 114, 116, 59], &[226, 128, 150]),
        (&[38, 110, 109, 105, 100, 59], &[226, 136, 164]),
        (&[38, 99, 105, 114, 99, 108, 101, 97, 114, 114, 111, 119, 114, 105, 103, 104, 116, 59], &[226, 134, 187]),
        (&[38, 98, 111, 112, 102, 59], &[240, 157, 149, 147]),
        (&[38, 110, 98, 115, 112], &[194, 160]),
        (&[38, 80, 105, 59], &[206, 160]),
        (&[38, 101, 113, 118, 112, 97, 114, 115, 108, 59], &[226, 167, 165]),
        (&[38, 115, 101, 115, 119, 97, 114, 59], &[226, 164, 169]),
        (&[38, 115, 112, 97, 100, 101, 115, 117, 105, 116, 59], &[226, 153, 160]),
        (&[38, 110, 97, 116, 117, 114, 59], &[226, 153, 174]),
        (&[38, 103, 69, 108, 59], &[226, 170, 140]),
        (&[38, 76, 111, 119, 101, 114, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 153]),
        (&[38, 69, 109, 112, 116, 121, 83, 109, 97, 108, 108, 83, 113, 117, 97, 114, 101, 59], &[226, 151, 187]),
        (&[38, 110, 115, 112, 97, 114, 59], &[226, 136, 166]),
        (&[38, 109, 105, 110, 117, 115, 59], &[226, 136, 146]),
        (&[38, 105, 109, 97, 103, 112, 97, 114, 116, 59], &[226, 132, 145]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 108, 101, 102, 116, 101, 113, 59], &[226, 138, 180]),
        (&[38, 82, 69, 71, 59], &[194, 174]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 76, 101, 115, 115, 59], &[226, 137, 185]),
        (&[38, 110, 115, 117, 112, 59], &[226, 138, 133]),
        (&[38, 72, 99, 105, 114, 99, 59], &[196, 164]),
        (&[38, 115, 105, 109, 101, 59], &[226, 137, 131]),
        (&[38, 117, 112, 104, 97, 114, 112, 111, 111, 110, 114, 105, 103, 104, 116, 59], &[226, 134, 190]),
        (&[38, 97, 110, 103, 114, 116, 118, 98, 100, 59], &[226, 166, 157]),
        (&[38, 100, 102, 105, 115, 104, 116, 59], &[226, 165, 191]),
        (&[38, 118, 97, 114, 112, 114, 111, 112, 116, 111, 59], &[226, 136, 157]),
        (&[38, 76, 101, 102, 116, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 154]),
        (&[38, 117, 99, 105, 114, 99], &[195, 187]),
        (&[38, 68, 111, 119, 110, 66, 114, 101, 118, 101, 59], &[204, 145]),
        (&[38, 102, 97, 108, 108, 105, 110, 103, 100, 111, 116, 115, 101, 113, 59], &[226, 137, 146]),
        (&[38, 108, 116, 59], &[60]),
        (&[38, 103, 101, 59], &[226, 137, 165]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 76, 101, 115, 115, 59], &[226, 137, 183]),
        (&[38, 114, 97, 99, 117, 116, 101, 59], &[197, 149]),
        (&[38, 118, 115, 117, 98, 110, 69, 59], &[226, 171, 139, 239, 184, 128]),
        (&[38, 86, 98, 97, 114, 59], &[226, 171, 171]),
        (&[38, 76, 97, 114, 114, 59], &[226, 134, 158]),
        (&[38, 115, 122, 108, 105, 103], &[195, 159]),
        (&[38, 85, 97, 99, 117, 116, 101, 59], &[195, 154]),
        (&[38, 77, 115, 99, 114, 59], &[226, 132, 179]),
        (&[38, 80, 114, 101, 99, 101, 100, 101, 115, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 137, 188]),
        (&[38, 100, 111, 117, 98, 108, 101, 98, 97, 114, 119, 101, 100, 103, 101, 59], &[226, 140, 134]),
        (&[38, 111, 99, 121, 59], &[208, 190]),
        (&[38, 105, 110, 99, 97, 114, 101, 59], &[226, 132, 133]),
        (&[38, 76, 102, 114, 59], &[240, 157, 148, 143]),
        (&[38, 115, 119, 110, 119, 97, 114, 59], &[226, 164, 170]),
        (&[38, 78, 111, 116, 76, 101, 115, 115, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 137, 184]),
        (&[38, 115, 117, 99, 99, 110, 115, 105, 109, 59], &[226, 139, 169]),
        (&[38, 117, 112, 104, 97, 114, 112, 111, 111, 110, 108, 101, 102, 116, 59], &[226, 134, 191]),
        (&[38, 100, 65, 114, 114, 59], &[226, 135, 147]),
        (&[38, 110, 108, 100, 114, 59], &[226, 128, 165]),
        (&[38, 110, 108, 116, 114, 105, 59], &[226, 139, 170]),
        (&[38, 105, 105, 105, 110, 116, 59], &[226, 136, 173]),
        (&[38, 67, 105, 114, 99, 108, 101, 77, 105, 110, 117, 115, 59], &[226, 138, 150]),
        (&[38, 68, 102, 114, 59], &[240, 157, 148, 135]),
        (&[38, 67, 97, 99, 117, 116, 101, 59], &[196, 134]),
        (&[38, 68, 111, 117, 98, 108, 101, 85, 112, 65, 114, 114, 111, 119, 59], &[226, 135, 145]),
        (&[38, 108, 101, 102, 116, 114, 105, 103, 104, 116, 104, 97, 114, 112, 111, 111, 110, 115, 59], &[226, 135, 139]),
        (&[38, 112, 101, 114, 99, 110, 116, 59], &[37]),
        (&[38, 73, 109, 97, 99, 114, 59], &[196, 170]),
        (&[38, 102, 108, 97, 116, 59], &[226, 153, 173]),
        (&[38, 68, 111, 117, 98, 108, 101, 85, 112, 68, 111, 119, 110, 65, 114, 114, 111, 119, 59], &[226, 135, 149]),
        (&[38, 115, 100, 111, 116, 59], &[226, 139, 133]),
        (&[38, 105, 110, 59], &[226, 136, 136]),
        (&[38, 99, 97, 114, 111, 110, 59], &[203, 135]),
        (&[38, 109, 97, 99, 114, 59], &[194, 175]),
        (&[38, 110, 115, 99, 101, 59], &[226, 170, 176, 204, 184]),
        (&[38, 114, 109, 111, 117, 115, 116, 97, 99, 104, 101, 59], &[226, 142, 177]),
        (&[38, 112, 97, 114, 116, 59], &[226, 136, 130]),
        (&[38, 83, 117, 99, 99, 101, 101, 100, 115, 69, 113, 117, 97, 108, 59], &[226, 170, 176]),
        (&[38, 85, 97, 114, 114, 111, 99, 105, 114, 59], &[226, 165, 137]),
        (&[38, 99, 101, 100, 105, 108, 59], &[194, 184]),
        (&[38, 65, 98, 114, 101, 118, 101, 59], &[196, 130]),
        (&[38, 114, 108, 97, 114, 114, 59], &[226, 135, 132]),
        (&[38, 66, 97, 99, 107, 115, 108, 97, 115, 104, 59], &[226, 136, 150]),
        (&[38, 111, 109, 105, 110, 117, 115, 59], &[226, 138, 150]),
        (&[38, 115, 105, 109, 112, 108, 117, 115, 59], &[226, 168, 164]),
        (&[38, 97, 116, 105, 108, 100, 101, 59], &[195, 163]),
        (&[38, 90, 99, 97, 114, 111, 110, 59], &[197, 189]),
        (&[38, 118, 97, 114, 115, 105, 103, 109, 97, 59], &[207, 130]),
        (&[38, 110, 111, 116, 110, 105, 59], &[226, 136, 140]),
        (&[38, 99, 97, 112, 115, 59], &[226, 136, 169, 239, 184, 128]),
        (&[38, 101, 99, 105, 114, 99], &[195, 170]),
        (&[38, 69, 116, 97, 59], &[206, 151]),
        (&[38, 114, 105, 103, 104, 116, 116, 104, 114, 101, 101, 116, 105, 109, 101, 115, 59], &[226, 139, 140]),
        (&[38, 112, 114, 99, 117, 101, 59], &[226, 137, 188]),
        (&[38, 104, 121, 112, 104, 101, 110, 59], &[226, 128, 144]),
        (&[38, 110, 105, 118, 59], &[226, 136, 139]),
        (&[38, 78, 111, 116, 76, 101, 102, 116, 84, 114, 105, 97, 110, 103, 108, 101, 69, 113, 117, 97, 108, 59], &[226, 139, 172]),
        (&[38, 114, 105, 103, 104, 116, 104, 97, 114, 112, 111, 111, 110, 117, 112, 59], &[226, 135, 128]),
        (&[38, 89, 73, 99, 121, 59], &[208, 135]),
        (&[38, 103, 116, 114, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 134]),
        (&[38, 108, 98, 114, 107, 101, 59], &[226, 166, 139]),
        (&[38, 97, 116, 105, 108, 100, 101], &[195, 163]),
        (&[38, 68, 111, 119, 110, 97, 114, 114, 111, 119, 59], &[226, 135, 147]),
        (&[38, 88, 102, 114, 59], &[240, 157, 148, 155]),
        (&[38, 115, 117, 112, 101, 100, 111, 116, 59], &[226, 171, 132]),
        (&[38, 98, 111, 120, 86, 72, 59], &[226, 149, 172]),
        (&[38, 111, 116, 105, 109, 101, 115, 97, 115, 59], &[226, 168, 182]),
        (&[38, 117, 100, 104, 97, 114, 59], &[226, 165, 174]),
        (&[38, 80, 114, 111, 112, 111, 114, 116, 105, 111, 110, 97, 108, 59], &[226, 136, 157]),
        (&[38, 110, 101, 113, 117, 105, 118, 59], &[226, 137, 162]),
        (&[38, 114, 105, 103, 104, 116, 108, 101, 102, 116, 104, 97, 114, 112, 111, 111, 110, 115, 59], &[226, 135, 140]),
        (&[38, 114, 105, 103, 104, 116, 104, 97, 114, 112, 111, 111, 110, 100, 111, 119, 110, 59], &[226, 135, 129]),
        (&[38, 100, 102, 114, 59], &[240, 157, 148, 161]),
        (&[38, 108, 116], &[60]),
        (&[38, 83, 113, 117, 97, 114, 101, 73, 110, 116, 101, 114, 115, 101, 99, 116, 105, 111, 110, 59], &[226, 138, 147]),
        (&[38, 115, 113, 117, 97, 114, 102, 59], &[226, 150, 170]),
        (&[38, 112, 114, 111, 102, 115, 117, 114, 102, 59], &[226, 140, 147]),
        (&[38, 112, 108, 97, 110, 99, 107, 59], &[226, 132, 143]),
        (&[38, 117, 100, 97, 114, 114, 59], &[226, 135, 133]),
        (&[38, 105, 110, 102, 105, 110, 116, 105, 101, 59], &[226, 167, 157]),
        (&[38, 68, 97, 115, 104, 118, 59], &[226, 171, 164]),
        (&[38, 65, 114, 105, 110, 103], &[195, 133]),
        (&[38, 115, 101, 97, 114, 114, 111, 119, 59], &[226, 134, 152]),
        (&[38, 99, 111, 110, 105, 110, 116, 59], &[226, 136, 174]),
        (&[38, 73, 110, 116, 59], &[226, 136, 172]),
        (&[38, 104, 121, 98, 117, 108, 108, 59], &[226, 129, 131]),
        (&[38, 108, 109, 111, 117, 115, 116, 59], &[226, 142, 176]),
        (&[38, 76, 101, 102, 116, 65, 114, 114, 111, 119, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 135, 134]),
        (&[38, 101, 109, 112, 116, 121, 59], &[226, 136, 133]),
        (&[38, 103, 110, 69, 59], &[226, 137, 169]),
        (&[38, 108, 111, 97, 110, 103, 59], &[226, 159, 172]),
        (&[38, 83, 117, 109, 59], &[226, 136, 145]),
        (&[38, 98, 97, 114, 119, 101, 100, 103, 101, 59], &[226, 140, 133]),
        (&[38, 83, 117, 99, 99, 101, 101, 100, 115, 59], &[226, 137, 187]),
        (&[38, 101, 103, 115, 59], &[226, 170, 150]),
        (&[38, 110, 99, 117, 112, 59], &[226, 169, 130]),
        (&[38, 108, 99, 101, 105, 108, 59], &[226, 140, 136]),
        (&[38, 114, 98, 114, 107, 115, 108, 117, 59], &[226, 166, 144]),
        (&[38, 110, 114, 65, 114, 114, 59], &[226, 135, 143]),
        (&[38, 89, 85, 99, 121, 59], &[208, 174]),
        (&[38, 112, 114, 101, 99, 110, 97, 112, 112, 114, 111, 120, 59], &[226, 170, 185]),
        (&[38, 83, 117, 112, 101, 114, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 138, 135]),
        (&[38, 79, 100, 98, 108, 97, 99, 59], &[197, 144]),
        (&[38, 86, 101, 114, 116, 105, 99, 97, 108, 83, 101, 112, 97, 114, 97, 116, 111, 114, 59], &[226, 157, 152]),
        (&[38, 122, 99, 121, 59], &[208, 183]),
        (&[38, 68, 90, 99, 121, 59], &[208, 143]),
        (&[38, 71, 114, 101, 97, 116, 101, 114, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 170, 162]),
        (&[38, 66, 102, 114, 59], &[240, 157, 148, 133]),
        (&[38, 97, 109, 112], &[38]),
        (&[38, 114, 111, 112, 108, 117, 115, 59], &[226, 168, 174]),
        (&[38, 86, 101, 114, 116, 105, 99, 97, 108, 76, 105, 110, 101, 59], &[124]),
        (&[38, 112, 114, 101, 99, 110, 115, 105, 109, 59], &[226, 139, 168]),
        (&[38, 87, 111, 112, 102, 59], &[240, 157, 149, 142]),
        (&[38, 114, 97, 110, 103, 59], &[226, 159, 169]),
        (&[38, 118, 66, 97, 114, 59], &[226, 171, 168]),
        (&[38, 108, 101, 102, 116, 114, 105, 103, 104, 116, 115, 113, 117, 105, 103, 97, 114, 114, 111, 119, 59], &[226, 134, 173]),
        (&[38, 115, 100, 111, 116, 101, 59], &[226, 169, 166]),
        (&[38, 115, 119, 65, 114, 114, 59], &[226, 135, 153]),
        (&[38, 66, 97, 114, 119, 101, 100, 59], &[226, 140, 134]),
        (&[38, 106, 115, 99, 114, 59], &[240, 157, 146, 191]),
        (&[38, 98, 115, 111, 108, 59], &[92]),
        (&[38, 78, 111, 116, 76, 101, 115, 115, 84, 105, 108, 100, 101, 59], &[226, 137, 180]),
        (&[38, 108, 114, 116, 114, 105, 59], &[226, 138, 191]),
        (&[38, 66, 114, 101, 118, 101, 59], &[203, 152]),
        (&[38, 103, 118, 110, 69, 59], &[226, 137, 169, 239, 184, 128]),
        (&[38, 100, 97, 115, 104, 118, 59], &[226, 138, 163]),
        (&[38, 108, 115, 113, 117, 111, 114, 59], &[226, 128, 154]),
        (&[38, 68, 105, 97, 99, 114, 105, 116, 105, 99, 97, 108, 65, 99, 117, 116, 101, 59], &[194, 180]),
        (&[38, 99, 117, 101, 112, 114, 59], &[226, 139, 158]),
        (&[38, 97, 101, 108, 105, 103], &[195, 166]),
        (&[38, 115, 117, 98, 112, 108, 117, 115, 59], &[226, 170, 191]),
        (&[38, 103, 110, 101, 59], &[226, 170, 136]),
        (&[38, 77, 111, 112, 102, 59], &[240, 157, 149, 132]),
        (&[38, 76, 111, 112, 102, 59], &[240, 157, 149, 131]),
        (&[38, 98, 107, 97, 114, 111, 119, 59], &[226, 164, 141]),
        (&[38, 115, 117, 112, 51], &[194, 179]),
        (&[38, 110, 118, 100, 97, 115, 104, 59], &[226, 138, 172]),
        (&[38, 71, 97, 109, 109, 97, 100, 59], &[207, 156]),
        (&[38, 109, 97, 99, 114], &[194, 175]),
        (&[38, 115, 105, 109, 108, 59], &[226, 170, 157]),
        (&[38, 108, 106, 99, 121, 59], &[209, 153]),
        (&[38, 68, 111, 119, 110, 84, 101, 101, 59], &[226, 138, 164]),
        (&[38, 100, 98, 107, 97, 114, 111, 119, 59], &[226, 164, 143]),
        (&[38, 110, 99, 97, 114, 111, 110, 59], &[197, 136]),
        (&[38, 110, 115, 105, 109, 101, 113, 59], &[226, 137, 132]),
        (&[38, 110, 108, 101, 113, 59], &[226, 137, 176]),
        (&[38, 85, 97, 114, 114, 59], &[226, 134, 159]),
        (&[38, 82, 105, 103, 104, 116, 86, 101, 99, 116, 111, 114, 59], &[226, 135, 128]),
        (&[38, 120, 115, 99, 114, 59], &[240, 157, 147, 141]),
        (&[38, 110, 104, 65, 114, 114, 59], &[226, 135, 142]),
        (&[38, 110, 114, 97, 114, 114, 99, 59], &[226, 164, 179, 204, 184]),
        (&[38, 108, 114, 99, 111, 114, 110, 101, 114, 59], &[226, 140, 159]),
        (&[38, 118, 111, 112, 102, 59], &[240, 157, 149, 167]),
        (&[38, 98, 108, 97, 99, 107, 116, 114, 105, 97, 110, 103, 108, 101, 59], &[226, 150, 180]),
        (&[38, 84, 99, 101, 100, 105, 108, 59], &[197, 162]),
        (&[38, 101, 99, 121, 59], &[209, 141]),
        (&[38, 114, 100, 108, 100, 104, 97, 114, 59], &[226, 165, 169]),
        (&[38, 116, 104, 107, 97, 112, 59], &[226, 137, 136]),
        (&[38, 98, 111, 120, 86, 108, 59], &[226, 149, 162]),
        (&[38, 76, 111, 110, 103, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 159, 182]),
        (&[38, 114, 99, 101, 100, 105, 108, 59], &[197, 151]),
        (&[38, 110, 115, 113, 115, 117, 98, 101, 59], &[226, 139, 162]),
        (&[38, 97, 99, 69, 59], &[226, 136, 190, 204, 179]),
        (&[38, 110, 115, 105, 109, 59], &[226, 137, 129]),
        (&[38, 115, 117, 99, 99, 59], &[226, 137, 187]),
        (&[38, 117, 108, 99, 114, 111, 112, 59], &[226, 140, 143]),
        (&[38, 99, 97, 112, 99, 117, 112, 59], &[226, 169, 135]),
        (&[38, 112, 108, 117, 115, 59], &[43]),
        (&[38, 97, 99, 121, 59], &[208, 176]),
        (&[38, 82, 111, 112, 102, 59], &[226, 132, 157]),
        (&[38, 108, 100, 99, 97, 59], &[226, 164, 182]),
        (&[38, 78, 102, 114, 59], &[240, 157, 148, 145]),
        (&[38, 115, 117, 112, 112, 108, 117, 115, 59], &[226, 171, 128]),
        (&[38, 78, 111, 116, 83, 117, 98, 115, 101, 116, 59], &[226, 138, 130, 226, 131, 146]),
        (&[38, 99, 99, 117, 112, 115, 59], &[226, 169, 140]),
        (&[38, 110, 115, 117, 98, 115, 101, 116, 59], &[226, 138, 130, 226, 131, 146]),
        (&[38, 115, 105, 109, 103, 69, 59], &[226, 170, 160]),
        (&[38, 102, 114, 97, 99, 53, 56, 59], &[226, 133, 157]),
        (&[38, 110, 99, 101, 100, 105, 108, 59], &[197, 134]),
        (&[38, 111, 115, 99, 114, 59], &[226, 132, 180]),
        (&[38, 102, 114, 97, 99, 49, 50, 59], &[194, 189]),
        (&[38, 117, 100, 98, 108, 97, 99, 59], &[197, 177]),
        (&[38, 100, 114, 99, 114, 111, 112, 59], &[226, 140, 140]),
        (&[38, 99, 117, 100, 97, 114, 114, 108, 59], &[226, 164, 184]),
        (&[38, 101, 112, 115, 105, 118, 59], &[207, 181]),
        (&[38, 71, 84], &[62]),
        (&[38, 85, 103, 114, 97, 118, 101, 59], &[195, 153]),
        (&[38, 112, 108, 117, 115, 115, 105, 109, 59], &[226, 168, 166]),
        (&[38, 89, 102, 114, 59], &[240, 157, 148, 156]),
        (&[38, 101, 113, 117, 101, 115, 116, 59], &[226, 137, 159]),
        (&[38, 97, 99, 100, 59], &[226, 136, 191]),
        (&[38, 108, 111, 122, 101, 110, 103, 101, 59], &[226, 151, 138]),
        (&[38, 112, 108, 117, 115, 100, 117, 59], &[226, 168, 165]),
        (&[38, 109, 105, 100, 100, 111, 116, 59], &[194, 183]),
        (&[38, 69, 120, 112, 111, 110, 101, 110, 116, 105, 97, 108, 69, 59], &[226, 133, 135]),
        (&[38, 110, 103, 101, 59], &[226, 137, 177]),
        (&[38, 101, 103, 59], &[226, 170, 154]),
        (&[38, 115, 99, 112, 111, 108, 105, 110, 116, 59], &[226, 168, 147]),
        (&[38, 108, 109, 111, 117, 115, 116, 97, 99, 104, 101, 59], &[226, 142, 176]),
        (&[38, 78, 111, 116, 83, 117, 112, 101, 114, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 138, 137]),
        (&[38, 98, 117, 109, 112, 101, 59], &[226, 137, 143]),
        (&[38, 107, 99, 121, 59], &[208, 186]),
        (&[38, 99, 101, 110, 116], &[194, 162]),
        (&[38, 108, 117, 114, 117, 104, 97, 114, 59], &[226, 165, 166]),
        (&[38, 66, 97, 114, 118, 59], &[226, 171, 167]),
        (&[38, 84, 115, 116, 114, 111, 107, 59], &[197, 166]),
        (&[38, 73, 116, 105, 108, 100, 101, 59], &[196, 168]),
        (&[38, 115, 109, 97, 108, 108, 115, 101, 116, 109, 105, 110, 117, 115, 59], &[226, 136, 150]),
        (&[38, 90, 101, 116, 97, 59], &[206, 150]),
        (&[38, 90, 100, 111, 116, 59], &[197, 187]),
        (&[38, 120, 104, 97, 114, 114, 59], &[226, 159, 183]),
        (&[38, 67, 115, 99, 114, 59], &[240, 157, 146, 158]),
        (&[38, 88, 115, 99, 114, 59], &[240, 157, 146, 179]),
        (&[38, 66, 101, 99, 97, 117, 115, 101, 59], &[226, 136, 181]),
        (&[38, 65, 77, 80], &[38]),
        (&[38, 78, 111, 116, 78, 101, 115, 116, 101, 100, 76, 101, 115, 115, 76, 101, 115, 115, 59], &[226, 170, 161, 204, 184]),
        (&[38, 98, 97, 99, 107, 99, 111, 110, 103, 59], &[226, 137, 140]),
        (&[38, 102, 108, 108, 105, 103, 59], &[239, 172, 130]),
        (&[38, 105, 116, 105, 108, 100, 101, 59], &[196, 169]),
        (&[38, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 146]),
        (&[38, 98, 111, 120, 100, 108, 59], &[226, 148, 144]),
        (&[38, 98, 108, 97, 99, 107, 108, 111, 122, 101, 110, 103, 101, 59], &[226, 167, 171]),
        (&[38, 104, 97, 114, 114, 99, 105, 114, 59], &[226, 165, 136]),
        (&[38, 103, 105, 109, 101, 108, 59], &[226, 132, 183]),
        (&[38, 109, 115, 99, 114, 59], &[240, 157, 147, 130]),
        (&[38, 108, 97, 114, 114, 115, 105, 109, 59], &[226, 165, 179]),
        (&[38, 103, 115, 105, 109, 101, 59], &[226, 170, 142]),
        (&[38, 114, 105, 115, 105, 110, 103, 100, 111, 116, 115, 101, 113, 59], &[226, 137, 147]),
        (&[38, 105, 113, 117, 101, 115, 116], &[194, 191]),
        (&[38, 115, 117, 112, 69, 59], &[226, 171, 134]),
        (&[38, 100, 101, 103, 59], &[194, 176]),
        (&[38, 112, 108, 117, 115, 97, 99, 105, 114, 59], &[226, 168, 163]),
        (&[38, 105, 117, 109, 108], &[195, 175]),
        (&[38, 111, 108, 116, 59], &[226, 167, 128]),
        (&[38, 103, 101, 113, 113, 59], &[226, 137, 167]),
        (&[38, 113, 105, 110, 116, 59], &[226, 168, 140]),
        (&[38, 115, 122, 108, 105, 103, 59], &[195, 159]),
        (&[38, 80, 114, 101, 99, 101, 100, 101, 115, 84, 105, 108, 100, 101, 59], &[226, 137, 190]),
        (&[38, 120, 104, 65, 114, 114, 59], &[226, 159, 186]),
        (&[38, 68, 111, 119, 110, 82, 105, 103, 104, 116, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 151]),
        (&[38, 111, 118, 98, 97, 114, 59], &[226, 140, 189]),
        (&[38, 97, 112, 112, 114, 111, 120, 101, 113, 59], &[226, 137, 138]),
        (&[38, 115, 109, 116, 59], &[226, 170, 170]),
        (&[38, 98, 108, 97, 110, 107, 59], &[226, 144, 163]),
        (&[38, 90, 111, 112, 102, 59], &[226, 132, 164]),
        (&[38, 115, 117, 98, 114, 97, 114, 114, 59], &[226, 165, 185]),
        (&[38, 67, 97, 112, 59], &[226, 139, 146]),
        (&[38, 110, 115, 104, 111, 114, 116, 109, 105, 100, 59], &[226, 136, 164]),
        (&[38, 73, 103, 114, 97, 118, 101, 59], &[195, 140]),
        (&[38, 97, 117, 109, 108], &[195, 164]),
        (&[38, 78, 111, 116, 84, 105, 108, 100, 101, 84, 105, 108, 100, 101, 59], &[226, 137, 137]),
        (&[38, 65, 99, 105, 114, 99], &[195, 130]),
        (&[38, 115, 117, 98, 109, 117, 108, 116, 59], &[226, 171, 129]),
        (&[38, 110, 116, 114, 105, 97, 110, 103, 108, 101, 114, 105, 103, 104, 116, 59], &[226, 139, 171]),
        (&[38, 99, 117, 112, 99, 97, 112, 59], &[226, 169, 134]),
        (&[38, 73, 102, 114, 59], &[226, 132, 145]),
        (&[38, 111, 114, 100, 101, 114, 111, 102, 59], &[226, 132, 180]),
        (&[38, 98, 111, 120, 118, 104, 59], &[226, 148, 188]),
        (&[38, 108, 101, 113, 115, 108, 97, 110, 116, 59], &[226, 169, 189]),
        (&[38, 89, 99, 105, 114, 99, 59], &[197, 182]),
        (&[38, 80, 114, 111, 112, 111, 114, 116, 105, 111, 110, 59], &[226, 136, 183]),
        (&[38, 98, 115, 101, 109, 105, 59], &[226, 129, 143]),
        (&[38, 65, 112, 112, 108, 121, 70, 117, 110, 99, 116, 105, 111, 110, 59], &[226, 129, 161]),
        (&[38, 85, 103, 114, 97, 118, 101], &[195, 153]),
        (&[38, 76, 111, 110, 103, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 159, 181]),
        (&[38, 83, 97, 99, 117, 116, 101, 59], &[197, 154]),
        (&[38, 110, 103, 101, 113, 59], &[226, 137, 177]),
        (&[38, 108, 117, 114, 100, 115, 104, 97, 114, 59], &[226, 165, 138]),
        (&[38, 110, 118, 68, 97, 115, 104, 59], &[226, 138, 173]),
        (&[38, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 66, 97, 114, 59], &[226, 135, 165]),
        (&[38, 85, 114, 105, 110, 103, 59], &[197, 174]),
        (&[38, 107, 106, 99, 121, 59], &[209, 156]),
        (&[38, 98, 111, 120, 85, 114, 59], &[226, 149, 153]),
        (&[38, 75, 97, 112, 112, 97, 59], &[206, 154]),
        (&[38, 118, 97, 114, 116, 104, 101, 116, 97, 59], &[207, 145]),
        (&[38, 70, 99, 121, 59], &[208, 164]),
        (&[38, 110, 108, 101, 113, 115, 108, 97, 110, 116, 59], &[226, 169, 189, 204, 184]),
        (&[38, 99, 101, 110, 116, 59], &[194, 162]),
        (&[38, 73, 103, 114, 97, 118, 101], &[195, 140]),
        (&[38, 103, 116, 114, 100, 111, 116, 59], &[226, 139, 151]),
        (&[38, 111, 103, 111, 110, 59], &[203, 155]),
        (&[38, 109, 99, 121, 59], &[208, 188]),
        (&[38, 105, 103, 114, 97, 118, 101, 59], &[195, 172]),
        (&[38, 110, 112, 97, 114, 116, 59], &[226, 136, 130, 204, 184]),
        (&[38, 116, 104, 105, 110, 115, 112, 59], &[226, 128, 137]),
        (&[38, 105, 101, 120, 99, 108], &[194, 161]),
        (&[38, 112, 104, 105, 118, 59], &[207, 149]),
        (&[38, 110, 112, 97, 114, 59], &[226, 136, 166]),
        (&[38, 115, 109, 116, 101, 115, 59], &[226, 170, 172, 239, 184, 128]),
        (&[38, 103, 110, 97, 112, 59], &[226, 170, 138]),
        (&[38, 118, 97, 114, 114, 104, 111, 59], &[207, 177]),
        (&[38, 112, 114, 59], &[226, 137, 186]),
        (&[38, 114, 117, 108, 117, 104, 97, 114, 59], &[226, 165, 168]),
        (&[38, 85, 112, 65, 114, 114, 111, 119, 66, 97, 114, 59], &[226, 164, 146]),
        (&[38, 105, 112, 114, 111, 100, 59], &[226, 168, 188]),
        (&[38, 108, 98, 98, 114, 107, 59], &[226, 157, 178]),
        (&[38, 110, 112, 97, 114, 97, 108, 108, 101, 108, 59], &[226, 136, 166]),
        (&[38, 70, 105, 108, 108, 101, 100, 86, 101, 114, 121, 83, 109, 97, 108, 108, 83, 113, 117, 97, 114, 101, 59], &[226, 150, 170]),
        (&[38, 112, 114, 105, 109, 101, 59], &[226, 128, 178]),
        (&[38, 98, 111, 120, 104, 59], &[226, 148, 128]),
        (&[38, 71, 100, 111, 116, 59], &[196, 160]),
        (&[38, 76, 116, 59], &[226, 137, 170]),
        (&[38, 97, 115, 116, 59], &[42]),
        (&[38, 71, 99, 101, 100, 105, 108, 59], &[196, 162]),
        (&[38, 104, 107, 115, 101, 97, 114, 111, 119, 59], &[226, 164, 165]),
        (&[38, 98, 111, 120, 85, 108, 59], &[226, 149, 156]),
        (&[38, 114, 116, 105, 109, 101, 115, 59], &[226, 139, 138]),
        (&[38, 97, 98, 114, 101, 118, 101, 59], &[196, 131]),
        (&[38, 103, 108, 106, 59], &[226, 170, 164]),
        (&[38, 116, 104, 101, 114, 101, 102, 111, 114, 101, 59], &[226, 136, 180]),
        (&[38, 99, 115, 117, 112, 101, 59], &[226, 171, 146]),
        (&[38, 79, 115, 108, 97, 115, 104, 59], &[195, 152]),
        (&[38, 76, 74, 99, 121, 59], &[208, 137]),
        (&[38, 116, 111, 112, 59], &[226, 138, 164]),
        (&[38, 112, 114, 111, 112, 59], &[226, 136, 157]),
        (&[38, 101, 102, 114, 59], &[240, 157, 148, 162]),
        (&[38, 110, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 154]),
        (&[38, 116, 99, 101, 100, 105, 108, 59], &[197, 163]),
        (&[38, 98, 111, 120, 117, 76, 59], &[226, 149, 155]),
        (&[38, 114, 116, 104, 114, 101, 101, 59], &[226, 139, 140]),
        (&[38, 114, 116, 114, 105, 108, 116, 114, 105, 59], &[226, 167, 142]),
        (&[38, 115, 117, 112, 115, 101, 116, 59], &[226, 138, 131]),
        (&[38, 108, 112, 97, 114, 108, 116, 59], &[226, 166, 147]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 102, 59], &[226, 166, 173]),
        (&[38, 79, 97, 99, 117, 116, 101], &[195, 147]),
        (&[38, 100, 99, 97, 114, 111, 110, 59], &[196, 143]),
        (&[38, 100, 111, 119, 110, 104, 97, 114, 112, 111, 111, 110, 114, 105, 103, 104, 116, 59], &[226, 135, 130]),
        (&[38, 115, 115, 99, 114, 59], &[240, 157, 147, 136]),
        (&[38, 108, 101, 115, 103, 101, 115, 59], &[226, 170, 147]),
        (&[38, 71, 97, 109, 109, 97, 59], &[206, 147]),
        (&[38, 101, 115, 99, 114, 59], &[226, 132, 175]),
        (&[38, 110, 101, 65, 114, 114, 59], &[226, 135, 151]),
        (&[38, 110, 86, 100, 97, 115, 104, 59], &[226, 138, 174]),
        (&[38, 68, 111, 117, 98, 108, 101, 67, 111, 110, 116, 111, 117, 114, 73, 110, 116, 101, 103, 114, 97, 108, 59], &[226, 136, 175]),
        (&[38, 85, 97, 99, 117, 116, 101], &[195, 154]),
        (&[38, 83, 117, 112, 59], &[226, 139, 145]),
        (&[38, 115, 116, 114, 110, 115, 59], &[194, 175]),
        (&[38, 116, 102, 114, 59], &[240, 157, 148, 177]),
        (&[38, 108, 101, 59], &[226, 137, 164]),
        (&[38, 114, 115, 113, 117, 111, 114, 59], &[226, 128, 153]),
        (&[38, 98, 108, 97, 99, 107, 116, 114, 105, 97, 110, 103, 108, 101, 100, 111, 119, 110, 59], &[226, 150, 190]),
        (&[38, 110, 115, 113, 115, 117, 112, 101, 59], &[226, 139, 163]),
        (&[38, 114, 104, 111, 59], &[207, 129]),
        (&[38, 100, 100, 97, 114, 114, 59], &[226, 135, 138]),
        (&[38, 98, 111, 120, 118, 82, 59], &[226, 149, 158]),
        (&[38, 114, 97, 116, 97, 105, 108, 59], &[226, 164, 154]),
        (&[38, 104, 111, 112, 102, 59], &[240, 157, 149, 153]),
        (&[38, 71, 116, 59], &[226, 137, 171]),
        (&[38, 104, 102, 114, 59], &[240, 157, 148, 165]),
        (&[38, 110, 115, 117, 98, 69, 59], &[226, 171, 133, 204, 184]),
        (&[38, 103, 103, 103, 59], &[226, 139, 153]),
        (&[38, 110, 100, 97, 115, 104, 59], &[226, 128, 147]),
        (&[38, 68, 111, 119, 110, 65, 114, 114, 111, 119, 85, 112, 65, 114, 114, 111, 119, 59], &[226, 135, 181]),
        (&[38, 108, 100, 114, 117, 115, 104, 97, 114, 59], &[226, 165, 139]),
        (&[38, 99, 117, 108, 97, 114, 114, 59], &[226, 134, 182]),
        (&[38, 97, 111, 103, 111, 110, 59], &[196, 133]),
        (&[38, 75, 111, 112, 102, 59], &[240, 157, 149, 130]),
        (&[38, 108, 115, 113, 98, 59], &[91]),
        (&[38, 108, 65, 116, 97, 105, 108, 59], &[226, 164, 155]),
        (&[38, 86, 99, 121, 59], &[208, 146]),
        (&[38, 108, 111, 112, 97, 114, 59], &[226, 166, 133]),
        (&[38, 108, 115, 105, 109, 59], &[226, 137, 178]),
        (&[38, 105, 115, 105, 110, 115, 59], &[226, 139, 180]),
        (&[38, 115, 99, 110, 115, 105, 109, 59], &[226, 139, 169]),
        (&[38, 115, 99, 110, 97, 112, 59], &[226, 170, 186]),
        (&[38, 112, 104, 109, 109, 97, 116, 59], &[226, 132, 179]),
        (&[38, 117, 114, 105, 110, 103, 59], &[197, 175]),
        (&[38, 101, 109, 115, 112, 49, 52, 59], &[226, 128, 133]),
        (&[38, 117, 116, 114, 105, 102, 59], &[226, 150, 180]),
        (&[38, 110, 97, 98, 108, 97, 59], &[226, 136, 135]),
        (&[38, 110, 99, 111, 110, 103, 100, 111, 116, 59], &[226, 169, 173, 204, 184]),
        (&[38, 98, 101, 99, 97, 117, 115, 59], &[226, 136, 181]),
        (&[38, 105, 109, 97, 103, 108, 105, 110, 101, 59], &[226, 132, 144]),
        (&[38, 119, 99, 105, 114, 99, 59], &[197, 181]),
        (&[38, 97, 112, 105, 100, 59], &[226, 137, 139]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 103, 59], &[226, 166, 174]),
        (&[38, 117, 102, 114, 59], &[240, 157, 148, 178]),
        (&[38, 97, 109, 97, 108, 103, 59], &[226, 168, 191]),
        (&[38, 110, 115, 117, 112, 115, 101, 116, 59], &[226, 138, 131, 226, 131, 146]),
        (&[38, 99, 97, 114, 101, 116, 59], &[226, 129, 129]),
        (&[38, 115, 117, 98, 110, 69, 59], &[226, 171, 139]),
        (&[38, 98, 97, 99, 107, 112, 114, 105, 109, 101, 59], &[226, 128, 181]),
        (&[38, 108, 101, 102, 116, 104, 97, 114, 112, 111, 111, 110, 100, 111, 119, 110, 59], &[226, 134, 189]),
        (&[38, 116, 115, 99, 121, 59], &[209, 134]),
        (&[38, 110, 111, 116, 105, 110, 118, 98, 59], &[226, 139, 183]),
        (&[38, 117, 114, 99, 111, 114, 110, 101, 114, 59], &[226, 140, 157]),
        (&[38, 99, 105, 114, 99, 101, 113, 59], &[226, 137, 151]),
        (&[38, 109, 97, 112, 115, 116, 111, 59], &[226, 134, 166]),
        (&[38, 112, 108, 117, 115, 98, 59], &[226, 138, 158]),
        (&[38, 100, 105, 101, 59], &[194, 168]),
        (&[38, 105, 97, 99, 117, 116, 101, 59], &[195, 173]),
        (&[38, 109, 105, 110, 117, 115, 100, 59], &[226, 136, 184]),
        (&[38, 78, 111, 116, 76, 101, 102, 116, 84, 114, 105, 97, 110, 103, 108, 101, 66, 97, 114, 59], &[226, 167, 143, 204, 184]),
        (&[38, 77, 101, 100, 105, 117, 109, 83, 112, 97, 99, 101, 59], &[226, 129, 159]),
        (&[38, 114, 97, 114, 114, 116, 108, 59], &[226, 134, 163]),
        (&[38, 120, 118, 101, 101, 59], &[226, 139, 129]),
        (&[38, 101, 109, 115, 112, 49, 51, 59], &[226, 128, 132]),
        (&[38, 76, 111, 110, 103, 108, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 159, 186]),
        (&[38, 68, 105, 97, 99, 114, 105, 116, 105, 99, 97, 108, 68, 111, 117, 98, 108, 101, 65, 99, 117, 116, 101, 59], &[203, 157]),
        (&[38, 110, 117, 109, 115, 112, 59], &[226, 128, 135]),
        (&[38, 108, 110, 69, 59], &[226, 137, 168]),
        (&[38, 101, 68, 111, 116, 59], &[226, 137, 145]),
        (&[38, 112, 111, 105, 110, 116, 105, 110, 116, 59], &[226, 168, 149]),
        (&[38, 79, 118, 101, 114, 66, 114, 97, 99, 101, 59], &[226, 143, 158]),
        (&[38, 105, 110, 111, 100, 111, 116, 59], &[196, 177]),
        (&[38, 111, 108, 105, 110, 101, 59], &[226, 128, 190]),
        (&[38, 110, 115, 117, 98, 101, 59], &[226, 138, 136]),
        (&[38, 72, 97, 116, 59], &[94]),
        (&[38, 110, 115, 117, 99, 99, 59], &[226, 138, 129]),
        (&[38, 85, 98, 114, 99, 121, 59], &[208, 142]),
        (&[38, 88, 105, 59], &[206, 158]),
        (&[38, 72, 115, 116, 114, 111, 107, 59], &[196, 166]),
        (&[38, 116, 111, 101, 97, 59], &[226, 164, 168]),
        (&[38, 103, 116, 59], &[62]),
        (&[38, 87, 115, 99, 114, 59], &[240, 157, 146, 178]),
        (&[38, 114, 97, 114, 114, 102, 115, 59], &[226, 164, 158]),
        (&[38, 101, 116, 104], &[195, 176]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 59], &[226, 150, 181]),
        (&[38, 99, 102, 114, 59], &[240, 157, 148, 160]),
        (&[38, 117, 109, 108], &[194, 168]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 69, 113, 117, 97, 108, 59], &[226, 137, 177]),
        (&[38, 100, 100, 111, 116, 115, 101, 113, 59], &[226, 169, 183]),
        (&[38, 79, 97, 99, 117, 116, 101, 59], &[195, 147]),
        (&[38, 118, 114, 116, 114, 105, 59], &[226, 138, 179]),
        (&[38, 108, 111, 112, 108, 117, 115, 59], &[226, 168, 173]),
        (&[38, 109, 97, 112, 115, 116, 111, 117, 112, 59], &[226, 134, 165]),
        (&[38, 108, 118, 110, 69, 59], &[226, 137, 168, 239, 184, 128]),
        (&[38, 78, 101, 115, 116, 101, 100, 76, 101, 115, 115, 76, 101, 115, 115, 59], &[226, 137, 170]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 169, 190, 204, 184]),
        (&[38, 78, 111, 116, 76, 101, 115, 115, 59], &[226, 137, 174]),
        (&[38, 97, 97, 99, 117, 116, 101], &[195, 161]),
        (&[38, 112, 114, 117, 114, 101, 108, 59], &[226, 138, 176]),
        (&[38, 116, 114, 105, 101, 59], &[226, 137, 156]),
        (&[38, 85, 112, 84, 101, 101, 59], &[226, 138, 165]),
        (&[38, 117, 102, 105, 115, 104, 116, 59], &[226, 165, 190]),
        (&[38, 82, 117, 108, 101, 68, 101, 108, 97, 121, 101, 100, 59], &[226, 167, 180]),
        (&[38, 113, 102, 114, 59], &[240, 157, 148, 174]),
        (&[38, 117, 99, 121, 59], &[209, 131]),
        (&[38, 111, 116, 105, 108, 100, 101, 59], &[195, 181]),
        (&[38, 98, 99, 121, 59], &[208, 177]),
        (&[38, 82, 105, 103, 104, 116, 85, 112, 86, 101, 99, 116, 111, 114, 59], &[226, 134, 190]),
        (&[38, 114, 109, 111, 117, 115, 116, 59], &[226, 142, 177]),
        (&[38, 102, 114, 97, 99, 49, 54, 59], &[226, 133, 153]),
        (&[38, 78, 111, 116, 84, 105, 108, 100, 101, 59], &[226, 137, 129]),
        (&[38, 79, 111, 112, 102, 59], &[240, 157, 149, 134]),
        (&[38, 108, 111, 110, 103, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 159, 182]),
        (&[38, 101, 115, 100, 111, 116, 59], &[226, 137, 144]),
        (&[38, 98, 111, 120, 86, 76, 59], &[226, 149, 163]),
        (&[38, 110, 117, 109, 101, 114, 111, 59], &[226, 132, 150]),
        (&[38, 78, 111, 116, 83, 113, 117, 97, 114, 101, 83, 117, 112, 101, 114, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 139, 163]),
        (&[38, 78, 111, 116, 69, 113, 117, 97, 108, 59], &[226, 137, 160]),
        (&[38, 115, 105, 109, 100, 111, 116, 59], &[226, 169, 170]),
        (&[38, 102, 111, 114, 107, 118, 59], &[226, 171, 153]),
        (&[38, 114, 99, 101, 105, 108, 59], &[226, 140, 137]),
        (&[38, 97, 115, 121, 109, 112, 101, 113, 59], &[226, 137, 141]),
        (&[38, 118, 101, 114, 116, 59], &[124]),
        (&[38, 99, 111, 112, 121], &[194, 169]),
        (&[38, 66, 111, 112, 102, 59], &[240, 157, 148, 185]),
        (&[38, 110, 106, 99, 121, 59], &[209, 154]),
        (&[38, 99, 114, 97, 114, 114, 59], &[226, 134, 181]),
        (&[38, 70, 115, 99, 114, 59], &[226, 132, 177]),
        (&[38, 89, 97, 99, 117, 116, 101], &[195, 157]),
        (&[38, 114, 65, 114, 114, 59], &[226, 135, 146]),
        (&[38, 108, 111, 111, 112, 97, 114, 114, 111, 119, 114, 105, 103, 104, 116, 59], &[226, 134, 172]),
        (&[38, 101, 120, 112, 111, 110, 101, 110, 116, 105, 97, 108, 101, 59], &[226, 133, 135]),
        (&[38, 110, 76, 116, 118, 59], &[226, 137, 170, 204, 184]),
        (&[38, 69, 109, 97, 99, 114, 59], &[196, 146]),
        (&[38, 111, 112, 108, 117, 115, 59], &[226, 138, 149]),
        (&[38, 78, 111, 116, 82, 105, 103, 104, 116, 84, 114, 105, 97, 110, 103, 108, 101, 59], &[226, 139, 171]),
        (&[38, 120, 109, 97, 112, 59], &[226, 159, 188]),
        (&[38, 99, 117, 114, 118, 101, 97, 114, 114, 111, 119, 108, 101, 102, 116, 59], &[226, 134, 182]),
        (&[38, 110, 112, 114, 59], &[226, 138, 128]),
        (&[38, 76, 101, 102, 116, 68, 111, 119, 110, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 153]),
        (&[38, 112, 114, 97, 112, 59], &[226, 170, 183]),
        (&[38, 99, 105, 114, 69, 59], &[226, 167, 131]),
        (&[38, 85, 112, 65, 114, 114, 111, 119, 68, 111, 119, 110, 65, 114, 114, 111, 119, 59], &[226, 135, 133]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 114, 105, 103, 104, 116, 101, 113, 59], &[226, 138, 181]),
        (&[38, 72, 105, 108, 98, 101, 114, 116, 83, 112, 97, 99, 101, 59], &[226, 132, 139]),
        (&[38, 107, 115, 99, 114, 59], &[240, 157, 147, 128]),
        (&[38, 98, 101, 116, 97, 59], &[206, 178]),
        (&[38, 113, 117, 101, 115, 116, 59], &[63]),
        (&[38, 68, 105, 97, 99, 114, 105, 116, 105, 99, 97, 108, 68, 111, 116, 59], &[203, 153]),
        (&[38, 110, 103, 69, 59], &[226, 137, 167, 204, 184]),
        (&[38, 98, 105, 103, 99, 105, 114, 99, 59], &[226, 151, 175]),
        (&[38, 78, 111, 116, 83, 113, 117, 97, 114, 101, 83, 117, 112, 101, 114, 115, 101, 116, 59], &[226, 138, 144, 204, 184]),
        (&[38, 108, 98, 114, 107, 115, 108, 100, 59], &[226, 166, 143]),
        (&[38, 110, 99, 97, 112, 59], &[226, 169, 131]),
        (&[38, 78, 111, 116, 71, 114, 101, 97, 116, 101, 114, 84, 105, 108, 100, 101, 59], &[226, 137, 181]),
        (&[38, 115, 102, 114, 59], &[240, 157, 148, 176]),
        (&[38, 77, 101, 108, 108, 105, 110, 116, 114, 102, 59], &[226, 132, 179]),
        (&[38, 99, 105, 114, 101, 59], &[226, 137, 151]),
        (&[38, 112, 114, 111, 102, 108, 105, 110, 101, 59], &[226, 140, 146]),
        (&[38, 120, 117, 112, 108, 117, 115, 59], &[226, 168, 132]),
        (&[38, 76, 99, 97, 114, 111, 110, 59], &[196, 189]),
        (&[38, 100, 115, 99, 121, 59], &[209, 149]),
        (&[38, 114, 112, 97, 114, 103, 116, 59], &[226, 166, 148]),
        (&[38, 83, 99, 121, 59], &[208, 161]),
        (&[38, 72, 97, 99, 101, 107, 59], &[203, 135]),
        (&[38, 119, 101, 100, 103, 101, 113, 59], &[226, 137, 153]),
        (&[38, 114, 98, 114, 97, 99, 101, 59], &[125]),
        (&[38, 83, 99, 59], &[226, 170, 188]),
        (&[38, 76, 101, 102, 116, 84, 114, 105, 97, 110, 103, 108, 101, 69, 113, 117, 97, 108, 59], &[226, 138, 180]),
        (&[38, 112, 114, 101, 99, 59], &[226, 137, 186]),
        (&[38, 76, 101, 102, 116, 65, 114, 114, 111, 119, 66, 97, 114, 59], &[226, 135, 164]),
        (&[38, 67, 97, 112, 105, 116, 97, 108, 68, 105, 102, 102, 101, 114, 101, 110, 116, 105, 97, 108, 68, 59], &[226, 133, 133]),
        (&[38, 108, 97, 99, 117, 116, 101, 59], &[196, 186]),
        (&[38, 108, 116, 114, 105, 59], &[226, 151, 131]),
        (&[38, 78, 74, 99, 121, 59], &[208, 138]),
        (&[38, 108, 109, 105, 100, 111, 116, 59], &[197, 128]),
        (&[38, 117, 112, 108, 117, 115, 59], &[226, 138, 142]),
        (&[38, 72, 111, 114, 105, 122, 111, 110, 116, 97, 108, 76, 105, 110, 101, 59], &[226, 148, 128]),
        (&[38, 111, 100, 105, 118, 59], &[226, 168, 184]),
        (&[38, 98, 101, 116, 119, 101, 101, 110, 59], &[226, 137, 172]),
        (&[38, 100, 115, 116, 114, 111, 107, 59], &[196, 145]),
        (&[38, 100, 111, 119, 110, 100, 111, 119, 110, 97, 114, 114, 111, 119, 115, 59], &[226, 135, 138]),
        (&[38, 116, 104, 101, 116, 97, 59], &[206, 184]),
        (&[38, 100, 105, 118, 105, 100, 101, 111, 110, 116, 105, 109, 101, 115, 59], &[226, 139, 135]),
        (&[38, 69, 113, 117, 97, 108, 84, 105, 108, 100, 101, 59], &[226, 137, 130]),
        (&[38, 82, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 146]),
        (&[38, 78, 111, 116, 68, 111, 117, 98, 108, 101, 86, 101, 114, 116, 105, 99, 97, 108, 66, 97, 114, 59], &[226, 136, 166]),
        (&[38, 80, 108, 117, 115, 77, 105, 110, 117, 115, 59], &[194, 177]),
        (&[38, 98, 111, 120, 72, 117, 59], &[226, 149, 167]),
        (&[38, 103, 108, 59], &[226, 137, 183]),
        (&[38, 77, 117, 59], &[206, 156]),
        (&[38, 100, 105, 118, 105, 100, 101, 59], &[195, 183]),
        (&[38, 100, 116, 100, 111, 116, 59], &[226, 139, 177]),
        (&[38, 78, 111, 116, 72, 117, 109, 112, 69, 113, 117, 97, 108, 59], &[226, 137, 143, 204, 184]),
        (&[38, 115, 117, 99, 99, 115, 105, 109, 59], &[226, 137, 191]),
        (&[38, 108, 100, 113, 117, 111, 59], &[226, 128, 156]),
        (&[38, 99, 105, 114, 99, 108, 101, 100, 99, 105, 114, 99, 59], &[226, 138, 154]),
        (&[38, 99, 117, 114, 97, 114, 114, 109, 59], &[226, 164, 188]),
        (&[38, 110, 111, 116, 110, 105, 118, 98, 59], &[226, 139, 190]),
        (&[38, 108, 116, 114, 105, 102, 59], &[226, 151, 130]),
        (&[38, 98, 112, 114, 105, 109, 101, 59], &[226, 128, 181]),
        (&[38, 99, 117, 114, 108, 121, 119, 101, 100, 103, 101, 59], &[226, 139, 143]),
        (&[38, 115, 117, 99, 99, 99, 117, 114, 108, 121, 101, 113, 59], &[226, 137, 189]),
        (&[38, 100, 114, 99, 111, 114, 110, 59], &[226, 140, 159]),
        (&[38, 115, 117, 112, 59], &[226, 138, 131]),
        (&[38, 112, 108, 117, 115, 109, 110, 59], &[194, 177]),
        (&[38, 113, 117, 101, 115, 116, 101, 113, 59], &[226, 137, 159]),
        (&[38, 105, 105, 111, 116, 97, 59], &[226, 132, 169]),
        (&[38, 111, 114, 100, 101, 114, 59], &[226, 132, 180]),
        (&[38, 111, 102, 114, 59], &[240, 157, 148, 172]),
        (&[38, 112, 111, 117, 110, 100, 59], &[194, 163]),
        (&[38, 99, 111, 110, 103, 59], &[226, 137, 133]),
        (&[38, 110, 105, 115, 100, 59], &[226, 139, 186]),
        (&[38, 115, 109, 105, 108, 101, 59], &[226, 140, 163]),
        (&[38, 110, 111, 116, 105, 110, 100, 111, 116, 59], &[226, 139, 181, 204, 184]),
        (&[38, 99, 117, 114, 97, 114, 114, 59], &[226, 134, 183]),
        (&[38, 105, 111, 116, 97, 59], &[206, 185]),
        (&[38, 110, 115, 104, 111, 114, 116, 112, 97, 114, 97, 108, 108, 101, 108, 59], &[226, 136, 166]),
        (&[38, 65, 115, 115, 105, 103, 110, 59], &[226, 137, 148]),
        (&[38, 115, 101, 97, 114, 114, 59], &[226, 134, 152]),
        (&[38, 100, 97, 114, 114, 59], &[226, 134, 147]),
        (&[38, 76, 99, 121, 59], &[208, 155]),
        (&[38, 108, 115, 99, 114, 59], &[240, 157, 147, 129]),
        (&[38, 100, 72, 97, 114, 59], &[226, 165, 165]),
        (&[38, 98, 110, 111, 116, 59], &[226, 140, 144]),
        (&[38, 114, 116, 114, 105, 102, 59], &[226, 150, 184]),
        (&[38, 110, 117, 59], &[206, 189]),
        (&[38, 98, 111, 120, 116, 105, 109, 101, 115, 59], &[226, 138, 160]),
        (&[38, 83, 117, 99, 104, 84, 104, 97, 116, 59], &[226, 136, 139]),
        (&[38, 118, 97, 114, 112, 104, 105, 59], &[207, 149]),
        (&[38, 98, 111, 120, 109, 105, 110, 117, 115, 59], &[226, 138, 159]),
        (&[38, 84, 105, 108, 100, 101, 69, 113, 117, 97, 108, 59], &[226, 137, 131]),
        (&[38, 67, 108, 111, 115, 101, 67, 117, 114, 108, 121, 81, 117, 111, 116, 101, 59], &[226, 128, 153]),
        (&[38, 82, 105, 103, 104, 116, 68, 111, 119, 110, 86, 101, 99, 116, 111, 114, 59], &[226, 135, 130]),
        (&[38, 115, 101, 120, 116, 59], &[226, 156, 182]),
        (&[38, 89, 65, 99, 121, 59], &[208, 175]),
        (&[38, 111, 109, 105, 100, 59], &[226, 166, 182]),
        (&[38, 108, 111, 122, 59], &[226, 151, 138]),
        (&[38, 66, 99, 121, 59], &[208, 145]),
        (&[38, 115, 111, 108, 98, 59], &[226, 167, 132]),
        (&[38, 122, 101, 101, 116, 114, 102, 59], &[226, 132, 168]),
        (&[38, 97, 110, 103, 122, 97, 114, 114, 59], &[226, 141, 188]),
        (&[38, 112, 114, 69, 59], &[226, 170, 179]),
        (&[38, 111, 100, 115, 111, 108, 100, 59], &[226, 166, 188]),
        (&[38, 114, 97, 113, 117, 111, 59], &[194, 187]),
        (&[38, 79, 109, 97, 99, 114, 59], &[197, 140]),
        (&[38, 108, 69, 103, 59], &[226, 170, 139]),
        (&[38, 108, 115, 116, 114, 111, 107, 59], &[197, 130]),
        (&[38, 101, 112, 97, 114, 59], &[226, 139, 149]),
        (&[38, 78, 111, 116, 82, 101, 118, 101, 114, 115, 101, 69, 108, 101, 109, 101, 110, 116, 59], &[226, 136, 140]),
        (&[38, 116, 99, 121, 59], &[209, 130]),
        (&[38, 99, 117, 118, 101, 101, 59], &[226, 139, 142]),
        (&[38, 116, 97, 117, 59], &[207, 132]),
        (&[38, 76, 101, 102, 116, 65, 110, 103, 108, 101, 66, 114, 97, 99, 107, 101, 116, 59], &[226, 159, 168]),
        (&[38, 108, 110, 101, 113, 113, 59], &[226, 137, 168]),
        (&[38, 67, 100, 111, 116, 59], &[196, 138]),
        (&[38, 65, 97, 99, 117, 116, 101, 59], &[195, 129]),
        (&[38, 116, 114, 105, 112, 108, 117, 115, 59], &[226, 168, 185]),
        (&[38, 115, 117, 98, 115, 101, 116, 59], &[226, 138, 130]),
        (&[38, 103, 101, 115, 100, 111, 116, 111, 108, 59], &[226, 170, 132]),
        (&[38, 111, 115, 108, 97, 115, 104, 59], &[195, 184]),
        (&[38, 121, 101, 110], &[194, 165]),
        (&[38, 98, 78, 111, 116, 59], &[226, 171, 173]),
        (&[38, 86, 101, 101, 59], &[226, 139, 129]),
        (&[38, 71, 103, 59], &[226, 139, 153]),
        (&[38, 82, 97, 110, 103, 59], &[226, 159, 171]),
        (&[38, 105, 97, 99, 117, 116, 101], &[195, 173]),
        (&[38, 78, 111, 116, 80, 114, 101, 99, 101, 100, 101, 115, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 139, 160]),
        (&[38, 103, 108, 97, 59], &[226, 170, 165]),
        (&[38, 108, 101, 102, 116, 104, 97, 114, 112, 111, 111, 110, 117, 112, 59], &[226, 134, 188]),
        (&[38, 67, 97, 121, 108, 101, 121, 115, 59], &[226, 132, 173]),
        (&[38, 99, 101, 100, 105, 108], &[194, 184]),
        (&[38, 105, 99, 105, 114, 99], &[195, 174]),
        (&[38, 114, 97, 114, 114, 115, 105, 109, 59], &[226, 165, 180]),
        (&[38, 110, 71, 103, 59], &[226, 139, 153, 204, 184]),
        (&[38, 100, 108, 99, 111, 114, 110, 59], &[226, 140, 158]),
        (&[38, 78, 111, 66, 114, 101, 97, 107, 59], &[226, 129, 160]),
        (&[38, 78, 111, 116, 83, 113, 117, 97, 114, 101, 83, 117, 98, 115, 101, 116, 69, 113, 117, 97, 108, 59], &[226, 139, 162]),
        (&[38, 67, 117, 112, 59], &[226, 139, 147]),
        (&[38, 76, 111, 110, 103, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 159, 185]),
        (&[38, 108, 111, 97, 114, 114, 59], &[226, 135, 189]),
        (&[38, 110, 116, 105, 108, 100, 101, 59], &[195, 177]),
        (&[38, 111, 108, 97, 114, 114, 59], &[226, 134, 186]),
        (&[38, 110, 118, 115, 105, 109, 59], &[226, 136, 188, 226, 131, 146]),
        (&[38, 76, 101, 102, 116, 84, 101, 101, 59], &[226, 138, 163]),
        (&[38, 114, 104, 97, 114, 100, 59], &[226, 135, 129]),
        (&[38, 97, 110, 103, 115, 116, 59], &[195, 133]),
        (&[38, 78, 111, 116, 83, 117, 99, 99, 101, 101, 100, 115, 84, 105, 108, 100, 101, 59], &[226, 137, 191, 204, 184]),
        (&[38, 108, 99, 121, 59], &[208, 187]),
        (&[38, 83, 113, 117, 97, 114, 101, 83, 117, 98, 115, 101, 116, 59], &[226, 138, 143]),
        (&[38, 98, 111, 120, 118, 76, 59], &[226, 149, 161]),
        (&[38, 79, 118, 101, 114, 80, 97, 114, 101, 110, 116, 104, 101, 115, 105, 115, 59], &[226, 143, 156]),
        (&[38, 110, 115, 99, 99, 117, 101, 59], &[226, 139, 161]),
        (&[38, 122, 119, 110, 106, 59], &[226, 128, 140]),
        (&[38, 76, 111, 110, 103, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 159, 184]),
        (&[38, 83, 72, 67, 72, 99, 121, 59], &[208, 169]),
        (&[38, 121, 105, 99, 121, 59], &[209, 151]),
        (&[38, 116, 104, 101, 114, 101, 52, 59], &[226, 136, 180]),
        (&[38, 115, 100, 111, 116, 98, 59], &[226, 138, 161]),
        (&[38, 73, 99, 121, 59], &[208, 152]),
        (&[38, 86, 102, 114, 59], &[240, 157, 148, 153]),
        (&[38, 73, 100, 111, 116, 59], &[196, 176]),
        (&[38, 97, 110, 103, 108, 101, 59], &[226, 136, 160]),
        (&[38, 74, 99, 105, 114, 99, 59], &[196, 180]),
        (&[38, 103, 97, 112, 59], &[226, 170, 134]),
        (&[38, 110, 102, 114, 59], &[240, 157, 148, 171]),
        (&[38, 108, 99, 117, 98, 59], &[123]),
        (&[38, 108, 108, 97, 114, 114, 59], &[226, 135, 135]),
        (&[38, 117, 112, 115, 105, 104, 59], &[207, 146]),
        (&[38, 99, 101, 110, 116, 101, 114, 100, 111, 116, 59], &[194, 183]),
        (&[38, 111, 108, 99, 105, 114, 59], &[226, 166, 190]),
        (&[38, 110, 103, 101, 115, 59], &[226, 169, 190, 204, 184]),
        (&[38, 111, 83, 59], &[226, 147, 136]),
        (&[38, 109, 105, 100, 99, 105, 114, 59], &[226, 171, 176]),
        (&[38, 86, 101, 114, 98, 97, 114, 59], &[226, 128, 150]),
        (&[38, 98, 110, 101, 59], &[61, 226, 131, 165]),
        (&[38, 82, 105, 103, 104, 116, 85, 112, 68, 111, 119, 110, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 143]),
        (&[38, 68, 105, 97, 99, 114, 105, 116, 105, 99, 97, 108, 84, 105, 108, 100, 101, 59], &[203, 156]),
        (&[38, 119, 115, 99, 114, 59], &[240, 157, 147, 140]),
        (&[38, 99, 119, 105, 110, 116, 59], &[226, 136, 177]),
        (&[38, 112, 102, 114, 59], &[240, 157, 148, 173]),
        (&[38, 100, 122, 105, 103, 114, 97, 114, 114, 59], &[226, 159, 191]),
        (&[38, 110, 115, 105, 109, 101, 59], &[226, 137, 132]),
        (&[38, 115, 112, 97, 100, 101, 115, 59], &[226, 153, 160]),
        (&[38, 99, 99, 97, 112, 115, 59], &[226, 169, 141]),
        (&[38, 104, 97, 114, 100, 99, 121, 59], &[209, 138]),
        (&[38, 115, 117, 98, 115, 101, 116, 110, 101, 113, 59], &[226, 138, 138]),
        (&[38, 98, 105, 103, 111, 112, 108, 117, 115, 59], &[226, 168, 129]),
        (&[38, 101, 103, 115, 100, 111, 116, 59], &[226, 170, 152]),
        (&[38, 110, 101, 97, 114, 104, 107, 59], &[226, 164, 164]),
        (&[38, 116, 119, 111, 104, 101, 97, 100, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 160]),
        (&[38, 105, 115, 105, 110, 115, 118, 59], &[226, 139, 179]),
        (&[38, 110, 111, 116, 59], &[194, 172]),
        (&[38, 78, 111, 116, 83, 117, 99, 99, 101, 101, 100, 115, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 139, 161]),
        (&[38, 67, 111, 117, 110, 116, 101, 114, 67, 108, 111, 99, 107, 119, 105, 115, 101, 67, 111, 110, 116, 111, 117, 114, 73, 110, 116, 101, 103, 114, 97, 108, 59], &[226, 136, 179]),
        (&[38, 103, 106, 99, 121, 59], &[209, 147]),
        (&[38, 99, 105, 114, 99, 59], &[203, 134]),
        (&[38, 101, 113, 117, 97, 108, 115, 59], &[61]),
        (&[38, 118, 115, 99, 114, 59], &[240, 157, 147, 139]),
        (&[38, 116, 114, 105, 97, 110, 103, 108, 101, 108, 101, 102, 116, 59], &[226, 151, 131]),
        (&[38, 97, 112, 59], &[226, 137, 136]),
        (&[38, 75, 99, 101, 100, 105, 108, 59], &[196, 182]),
        (&[38, 110, 115, 117, 112, 115, 101, 116, 101, 113, 59], &[226, 138, 137]),
        (&[38, 104, 97, 105, 114, 115, 112, 59], &[226, 128, 138]),
        (&[38, 116, 104, 105, 99, 107, 115, 105, 109, 59], &[226, 136, 188]),
        (&[38, 102, 115, 99, 114, 59], &[240, 157, 146, 187]),
        (&[38, 108, 116, 113, 117, 101, 115, 116, 59], &[226, 169, 187]),
        (&[38, 98, 111, 120, 118, 59], &[226, 148, 130]),
        (&[38, 101, 113, 99, 111, 108, 111, 110, 59], &[226, 137, 149]),
        (&[38, 105, 116, 59], &[226, 129, 162]),
        (&[38, 116, 105, 109, 101, 115], &[195, 151]),
        (&[38, 112, 114, 110, 97, 112, 59], &[226, 170, 185]),
        (&[38, 110, 76, 116, 59], &[226, 137, 170, 226, 131, 146]),
        (&[38, 108, 104, 97, 114, 117, 59], &[226, 134, 188]),
        (&[38, 97, 110, 103, 109, 115, 100, 97, 101, 59], &[226, 166, 172]),
        (&[38, 108, 111, 110, 103, 108, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 159, 183]),
        (&[38, 65, 116, 105, 108, 100, 101], &[195, 131]),
        (&[38, 82, 115, 99, 114, 59], &[226, 132, 155]),
        (&[38, 101, 108, 108, 59], &[226, 132, 147]),
        (&[38, 84, 83, 72, 99, 121, 59], &[208, 139]),
        (&[38, 103, 114, 97, 118, 101, 59], &[96]),
        (&[38, 100, 111, 108, 108, 97, 114, 59], &[36]),
        (&[38, 109, 112, 59], &[226, 136, 147]),
        (&[38, 118, 101, 101, 98, 97, 114, 59], &[226, 138, 187]),
        (&[38, 103, 101, 113, 115, 108, 97, 110, 116, 59], &[226, 169, 190]),
        (&[38, 116, 105, 110, 116, 59], &[226, 136, 173]),
        (&[38, 115, 105, 103, 109, 97, 59], &[207, 131]),
        (&[38, 83, 117, 99, 99, 101, 101, 100, 115, 83, 108, 97, 110, 116, 69, 113, 117, 97, 108, 59], &[226, 137, 189]),
        (&[38, 103, 110, 101, 113, 113, 59], &[226, 137, 169]),
        (&[38, 79, 116, 105, 108, 100, 101], &[195, 149]),
        (&[38, 106, 111, 112, 102, 59], &[240, 157, 149, 155]),
        (&[38, 113, 112, 114, 105, 109, 101, 59], &[226, 129, 151]),
        (&[38, 102, 106, 108, 105, 103, 59], &[102, 106]),
        (&[38, 105, 102, 114, 59], &[240, 157, 148, 166]),
        (&[38, 105, 109, 97, 116, 104, 59], &[196, 177]),
        (&[38, 82, 66, 97, 114, 114, 59], &[226, 164, 144]),
        (&[38, 120, 99, 117, 112, 59], &[226, 139, 131]),
        (&[38, 108, 97, 114, 114, 102, 115, 59], &[226, 164, 157]),
        (&[38, 108, 101, 115, 99, 99, 59], &[226, 170, 168]),
        (&[38, 115, 105, 109, 59], &[226, 136, 188]),
        (&[38, 113, 117, 111, 116, 59], &[34]),
        (&[38, 68, 111, 119, 110, 76, 101, 102, 116, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 158]),
        (&[38, 68, 111, 119, 110, 65, 114, 114, 111, 119, 66, 97, 114, 59], &[226, 164, 147]),
        (&[38, 117, 111, 103, 111, 110, 59], &[197, 179]),
        (&[38, 111, 114, 100, 109, 59], &[194, 186]),
        (&[38, 107, 99, 101, 100, 105, 108, 59], &[196, 183]),
        (&[38, 108, 111, 116, 105, 109, 101, 115, 59], &[226, 168, 180]),
        (&[38, 70, 102, 114, 59], &[240, 157, 148, 137]),
        (&[38, 109, 101, 97, 115, 117, 114, 101, 100, 97, 110, 103, 108, 101, 59], &[226, 136, 161]),
        (&[38, 76, 101, 115, 115, 71, 114, 101, 97, 116, 101, 114, 59], &[226, 137, 182]),
        (&[38, 100, 111, 112, 102, 59], &[240, 157, 149, 149]),
        (&[38, 108, 110, 101, 59], &[226, 170, 135]),
        (&[38, 85, 110, 105, 111, 110, 59], &[226, 139, 131]),
        (&[38, 111, 117, 109, 108], &[195, 182]),
        (&[38, 100, 111, 119, 110, 104, 97, 114, 112, 111, 111, 110, 108, 101, 102, 116, 59], &[226, 135, 131]),
        (&[38, 109, 97, 114, 107, 101, 114, 59], &[226, 150, 174]),
        (&[38, 103, 116, 114, 101, 113, 108, 101, 115, 115, 59], &[226, 139, 155]),
        (&[38, 114, 97, 116, 105, 111, 59], &[226, 136, 182]),
        (&[38, 102, 111, 112, 102, 59], &[240, 157, 149, 151]),
        (&[38, 120, 114, 97, 114, 114, 59], &[226, 159, 182]),
        (&[38, 117, 97, 99, 117, 116, 101, 59], &[195, 186]),
        (&[38, 99, 117, 114, 118, 101, 97, 114, 114, 111, 119, 114, 105, 103, 104, 116, 59], &[226, 134, 183]),
        (&[38, 83, 72, 99, 121, 59], &[208, 168]),
        (&[38, 71, 99, 105, 114, 99, 59], &[196, 156]),
        (&[38, 115, 113, 115, 117, 112, 59], &[226, 138, 144]),
        (&[38, 99, 114, 111, 115, 115, 59], &[226, 156, 151]),
        (&[38, 105, 99, 121, 59], &[208, 184]),
        (&[38, 65, 114, 105, 110, 103, 59], &[195, 133]),
        (&[38, 85, 110, 100, 101, 114, 66, 97, 114, 59], &[95]),
        (&[38, 108, 108, 116, 114, 105, 59], &[226, 151, 186]),
        (&[38, 82, 101, 59], &[226, 132, 156]),
        (&[38, 98, 111, 120, 104, 68, 59], &[226, 149, 165]),
        (&[38, 115, 112, 97, 114, 59], &[226, 136, 165]),
        (&[38, 111, 114, 100, 102, 59], &[194, 170]),
        (&[38, 115, 105, 109, 110, 101, 59], &[226, 137, 134]),
        (&[38, 101, 100, 111, 116, 59], &[196, 151]),
        (&[38, 67, 99, 101, 100, 105, 108, 59], &[195, 135]),
        (&[38, 110, 118, 105, 110, 102, 105, 110, 59], &[226, 167, 158]),
        (&[38, 112, 104, 111, 110, 101, 59], &[226, 152, 142]),
        (&[38, 108, 97, 110, 103, 108, 101, 59], &[226, 159, 168]),
        (&[38, 103, 111, 112, 102, 59], &[240, 157, 149, 152]),
        (&[38, 112, 108, 117, 115, 116, 119, 111, 59], &[226, 168, 167]),
        (&[38, 87, 102, 114, 59], &[240, 157, 148, 154]),
        (&[38, 90, 101, 114, 111, 87, 105, 100, 116, 104, 83, 112, 97, 99, 101, 59], &[226, 128, 139]),
        (&[38, 99, 111, 112, 114, 111, 100, 59], &[226, 136, 144]),
        (&[38, 100, 100, 97, 103, 103, 101, 114, 59], &[226, 128, 161]),
        (&[38, 119, 101, 100, 103, 101, 59], &[226, 136, 167]),
        (&[38, 118, 112, 114, 111, 112, 59], &[226, 136, 157]),
        (&[38, 110, 97, 112, 111, 115, 59], &[197, 137]),
        (&[38, 114, 111, 98, 114, 107, 59], &[226, 159, 167]),
        (&[38, 107, 103, 114, 101, 101, 110, 59], &[196, 184]),
        (&[38, 84, 104, 105, 99, 107, 83, 112, 97, 99, 101, 59], &[226, 129, 159, 226, 128, 138]),
        (&[38, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 135, 132]),
        (&[38, 110, 117, 109, 59], &[35]),
        (&[38, 80, 99, 121, 59], &[208, 159]),
        (&[38, 110, 114, 97, 114, 114, 59], &[226, 134, 155]),
        (&[38, 68, 111, 117, 98, 108, 101, 76, 101, 102, 116, 65, 114, 114, 111, 119, 59], &[226, 135, 144]),
        (&[38, 107, 102, 114, 59], &[240, 157, 148, 168]),
        (&[38, 98, 111, 120, 100, 114, 59], &[226, 148, 140]),
        (&[38, 68, 111, 112, 102, 59], &[240, 157, 148, 187]),
        (&[38, 102, 102, 108, 108, 105, 103, 59], &[239, 172, 132]),
        (&[38, 97, 108, 101, 112, 104, 59], &[226, 132, 181]),
        (&[38, 76, 109, 105, 100, 111, 116, 59], &[196, 191]),
        (&[38, 115, 117, 112, 100, 111, 116, 59], &[226, 170, 190]),
        (&[38, 69, 108, 101, 109, 101, 110, 116, 59], &[226, 136, 136]),
        (&[38, 99, 101, 109, 112, 116, 121, 118, 59], &[226, 166, 178]),
        (&[38, 103, 101, 113, 59], &[226, 137, 165]),
        (&[38, 76, 97, 99, 117, 116, 101, 59], &[196, 185]),
        (&[38, 112, 115, 99, 114, 59], &[240, 157, 147, 133]),
        (&[38, 79, 116, 105, 108, 100, 101, 59], &[195, 149]),
        (&[38, 97, 99, 105, 114, 99, 59], &[195, 162]),
        (&[38, 68, 111, 117, 98, 108, 101, 68, 111, 116, 59], &[194, 168]),
        (&[38, 85, 110, 100, 101, 114, 80, 97, 114, 101, 110, 116, 104, 101, 115, 105, 115, 59], &[226, 143, 157]),
        (&[38, 79, 117, 109, 108], &[195, 150]),
        (&[38, 77, 99, 121, 59], &[208, 156]),
        (&[38, 115, 115, 116, 97, 114, 102, 59], &[226, 139, 134]),
        (&[38, 115, 117, 98, 115, 101, 116, 101, 113, 113, 59], &[226, 171, 133]),
        (&[38, 108, 112, 97, 114, 59], &[40]),
        (&[38, 112, 97, 114, 59], &[226, 136, 165]),
        (&[38, 110, 97, 110, 103, 59], &[226, 136, 160, 226, 131, 146]),
        (&[38, 97, 110, 100, 118, 59], &[226, 169, 154]),
        (&[38, 117, 112, 97, 114, 114, 111, 119, 59], &[226, 134, 145]),
        (&[38, 108, 110, 115, 105, 109, 59], &[226, 139, 166]),
        (&[38, 104, 111, 109, 116, 104, 116, 59], &[226, 136, 187]),
        (&[38, 103, 116, 99, 99, 59], &[226, 170, 167]),
        (&[38, 112, 114, 111, 102, 97, 108, 97, 114, 59], &[226, 140, 174]),
        (&[38, 85, 117, 109, 108, 59], &[195, 156]),
        (&[38, 100, 104, 97, 114, 108, 59], &[226, 135, 131]),
        (&[38, 110, 118, 114, 65, 114, 114, 59], &[226, 164, 131]),
        (&[38, 108, 118, 101, 114, 116, 110, 101, 113, 113, 59], &[226, 137, 168, 239, 184, 128]),
        (&[38, 116, 98, 114, 107, 59], &[226, 142, 180]),
        (&[38, 111, 115, 108, 97, 115, 104], &[195, 184]),
        (&[38, 110, 104, 97, 114, 114, 59], &[226, 134, 174]),
        (&[38, 110, 115, 117, 112, 101, 59], &[226, 138, 137]),
        (&[38, 76, 108, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 154]),
        (&[38, 97, 119, 99, 111, 110, 105, 110, 116, 59], &[226, 136, 179]),
        (&[38, 108, 97, 113, 117, 111], &[194, 171]),
        (&[38, 103, 116, 113, 117, 101, 115, 116, 59], &[226, 169, 188]),
        (&[38, 80, 114, 111, 100, 117, 99, 116, 59], &[226, 136, 143]),
        (&[38, 100, 116, 114, 105, 102, 59], &[226, 150, 190]),
        (&[38, 101, 112, 97, 114, 115, 108, 59], &[226, 167, 163]),
        (&[38, 65, 103, 114, 97, 118, 101], &[195, 128]),
        (&[38, 104, 97, 108, 102, 59], &[194, 189]),
        (&[38, 99, 111, 112, 102, 59], &[240, 157, 149, 148]),
        (&[38, 98, 108, 107, 51, 52, 59], &[226, 150, 147]),
        (&[38, 121, 117, 109, 108, 59], &[195, 191]),
        (&[38, 99, 105, 114, 99, 108, 101, 100, 82, 59], &[194, 174]),
        (&[38, 99, 117, 114, 108, 121, 101, 113, 112, 114, 101, 99, 59], &[226, 139, 158]),
        (&[38, 100, 99, 121, 59], &[208, 180]),
        (&[38, 120, 110, 105, 115, 59], &[226, 139, 187]),
        (&[38, 68, 115, 99, 114, 59], &[240, 157, 146, 159]),
        (&[38, 119, 102, 114, 59], &[240, 157, 148, 180]),
        (&[38, 117, 114, 116, 114, 105, 59], &[226, 151, 185]),
        (&[38, 107, 111, 112, 102, 59], &[240, 157, 149, 156]),
        (&[38, 82, 105, 103, 104, 116, 84, 101, 101, 59], &[226, 138, 162]),
        (&[38, 67, 102, 114, 59], &[226, 132, 173]),
        (&[38, 116, 104, 107, 115, 105, 109, 59], &[226, 136, 188]),
        (&[38, 69, 120, 105, 115, 116, 115, 59], &[226, 136, 131]),
        (&[38, 110, 101, 59], &[226, 137, 160]),
        (&[38, 86, 101, 114, 116, 105, 99, 97, 108, 66, 97, 114, 59], &[226, 136, 163]),
        (&[38, 108, 101, 115, 100, 111, 116, 59], &[226, 169, 191]),
        (&[38, 111, 97, 99, 117, 116, 101, 59], &[195, 179]),
        (&[38, 82, 97, 114, 114, 116, 108, 59], &[226, 164, 150]),
        (&[38, 84, 97, 117, 59], &[206, 164]),
        (&[38, 100, 111, 116, 59], &[203, 153]),
        (&[38, 73, 79, 99, 121, 59], &[208, 129]),
        (&[38, 101, 103, 114, 97, 118, 101], &[195, 168]),
        (&[38, 111, 114, 100, 109], &[194, 186]),
        (&[38, 108, 116, 99, 99, 59], &[226, 170, 166]),
        (&[38, 114, 104, 97, 114, 117, 59], &[226, 135, 128]),
        (&[38, 112, 114, 101, 99, 110, 101, 113, 113, 59], &[226, 170, 181]),
        (&[38, 78, 111, 116, 82, 105, 103, 104, 116, 84, 114, 105, 97, 110, 103, 108, 101, 69, 113, 117, 97, 108, 59], &[226, 139, 173]),
        (&[38, 103, 101, 115, 59], &[226, 169, 190]),
        (&[38, 74, 115, 101, 114, 99, 121, 59], &[208, 136]),
        (&[38, 112, 101, 114, 116, 101, 110, 107, 59], &[226, 128, 177]),
        (&[38, 102, 108, 116, 110, 115, 59], &[226, 150, 177]),
        (&[38, 82, 105, 103, 104, 116, 84, 101, 101, 65, 114, 114, 111, 119, 59], &[226, 134, 166]),
        (&[38, 78, 116, 105, 108, 100, 101], &[195, 145]),
        (&[38, 108, 98, 114, 97, 99, 107, 59], &[91]),
        (&[38, 108, 99, 101, 100, 105, 108, 59], &[196, 188]),
        (&[38, 97, 115, 99, 114, 59], &[240, 157, 146, 182]),
        (&[38, 117, 104, 97, 114, 114, 59], &[226, 134, 190]),
        (&[38, 101, 102, 68, 111, 116, 59], &[226, 137, 146]),
        (&[38, 115, 116, 97, 114, 59], &[226, 152, 134]),
        (&[38, 78, 101, 103, 97, 116, 105, 118, 101, 86, 101, 114, 121, 84, 104, 105, 110, 83, 112, 97, 99, 101, 59], &[226, 128, 139]),
        (&[38, 103, 97, 99, 117, 116, 101, 59], &[199, 181]),
        (&[38, 114, 97, 114, 114, 98, 102, 115, 59], &[226, 164, 160]),
        (&[38, 105, 101, 120, 99, 108, 59], &[194, 161]),
        (&[38, 74, 102, 114, 59], &[240, 157, 148, 141]),
        (&[38, 108, 108, 104, 97, 114, 100, 59], &[226, 165, 171]),
        (&[38, 111, 112, 97, 114, 59], &[226, 166, 183]),
        (&[38, 99, 105, 114, 59], &[226, 151, 139]),
        (&[38, 115, 117, 112, 49], &[194, 185]),
        (&[38, 116, 111, 112, 102, 59], &[240, 157, 149, 165]),
        (&[38, 114, 98, 114, 97, 99, 107, 59], &[93]),
        (&[38, 103, 108, 69, 59], &[226, 170, 146]),
        (&[38, 79, 117, 109, 108, 59], &[195, 150]),
        (&[38, 76, 101, 102, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 144]),
        (&[38, 120, 117, 116, 114, 105, 59], &[226, 150, 179]),
        (&[38, 73, 110, 116, 101, 114, 115, 101, 99, 116, 105, 111, 110, 59], &[226, 139, 130]),
        (&[38, 118, 68, 97, 115, 104, 59], &[226, 138, 168]),
        (&[38, 114, 100, 99, 97, 59], &[226, 164, 183]),
        (&[38, 80, 115, 99, 114, 59], &[240, 157, 146, 171]),
        (&[38, 108, 116, 114, 105, 101, 59], &[226, 138, 180]),
        (&[38, 85, 99, 105, 114, 99], &[195, 155]),
        (&[38, 67, 105, 114, 99, 108, 101, 84, 105, 109, 101, 115, 59], &[226, 138, 151]),
        (&[38, 73, 110, 118, 105, 115, 105, 98, 108, 101, 84, 105, 109, 101, 115, 59], &[226, 129, 162]),
        (&[38, 111, 100, 97, 115, 104, 59], &[226, 138, 157]),
        (&[38, 98, 101, 114, 110, 111, 117, 59], &[226, 132, 172]),
        (&[38, 85, 112, 65, 114, 114, 111, 119, 59], &[226, 134, 145]),
        (&[38, 85, 112, 68, 111, 119, 110, 65, 114, 114, 111, 119, 59], &[226, 134, 149]),
        (&[38, 97, 119, 105, 110, 116, 59], &[226, 168, 145]),
        (&[38, 102, 114, 97, 99, 51, 52], &[194, 190]),
        (&[38, 121, 99, 105, 114, 99, 59], &[197, 183]),
        (&[38, 105, 117, 107, 99, 121, 59], &[209, 150]),
        (&[38, 98, 117, 108, 108, 101, 116, 59], &[226, 128, 162]),
        (&[38, 114, 111, 97, 110, 103, 59], &[226, 159, 173]),
        (&[38, 105, 110, 102, 105, 110, 59], &[226, 136, 158]),
        (&[38, 112, 108, 117, 115, 100, 111, 59], &[226, 136, 148]),
        (&[38, 103, 116], &[62]),
        (&[38, 65, 117, 109, 108], &[195, 132]),
        (&[38, 82, 97, 99, 117, 116, 101, 59], &[197, 148]),
        (&[38, 110, 108, 101, 102, 116, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 174]),
        (&[38, 65, 111, 103, 111, 110, 59], &[196, 132]),
        (&[38, 114, 100, 113, 117, 111, 59], &[226, 128, 157]),
        (&[38, 85, 100, 98, 108, 97, 99, 59], &[197, 176]),
        (&[38, 82, 104, 111, 59], &[206, 161]),
        (&[38, 114, 101, 103], &[194, 174]),
        (&[38, 100, 114, 98, 107, 97, 114, 111, 119, 59], &[226, 164, 144]),
        (&[38, 115, 117, 98, 101, 59], &[226, 138, 134]),
        (&[38, 76, 101, 102, 116, 84, 114, 105, 97, 110, 103, 108, 101, 66, 97, 114, 59], &[226, 167, 143]),
        (&[38, 105, 109, 97, 103, 101, 59], &[226, 132, 145]),
        (&[38, 115, 113, 115, 117, 98, 115, 101, 116, 59], &[226, 138, 143]),
        (&[38, 80, 97, 114, 116, 105, 97, 108, 68, 59], &[226, 136, 130]),
        (&[38, 109, 68, 68, 111, 116, 59], &[226, 136, 186]),
        (&[38, 105, 99, 59], &[226, 129, 163]),
        (&[38, 101, 108, 115, 59], &[226, 170, 149]),
        (&[38, 114, 97, 114, 114, 59], &[226, 134, 146]),
        (&[38, 111, 103, 114, 97, 118, 101], &[195, 178]),
        (&[38, 82, 105, 103, 104, 116, 68, 111, 119, 110, 86, 101, 99, 116, 111, 114, 66, 97, 114, 59], &[226, 165, 149]),
        (&[38, 98, 115, 105, 109, 59], &[226, 136, 189]),
        (&[38, 83, 99, 105, 114, 99, 59], &[197, 156]),
        (&[38, 116, 111, 112, 98, 111, 116, 59], &[226, 140, 182]),
        (&[38, 117, 72, 97, 114, 59], &[226, 165, 163]),
        (&[38, 106, 102, 114, 59], &[240, 157, 148, 167]),
        (&[38, 114, 97, 113, 117, 111], &[194, 187]),
        (&[38, 118, 97, 114, 115, 117, 98, 115, 101, 116, 110, 101, 113, 59], &[226, 138, 138, 239, 184, 128]),
        (&[38, 84, 102, 114, 59], &[240, 157, 148, 151]),
        (&[38, 73, 111, 112, 102, 59], &[240, 157, 149, 128]),
        (&[38, 99, 105, 114, 99, 108, 101, 100, 100, 97, 115, 104, 59], &[226, 138, 157]),
        (&[38, 115, 101, 65, 114, 114, 59], &[226, 135, 152]),
        (&[38, 103, 116, 108, 80, 97, 114, 59], &[226, 166, 149]),
        (&[38, 98, 111, 120, 104, 117, 59], &[226, 148, 180]),
        (&[38, 76, 101, 102, 116, 84, 101, 101, 65, 114, 114, 111, 119, 59], &[226, 134, 164]),
        (&[38, 108, 101, 115, 115, 101, 113, 103, 116, 114, 59], &[226, 139, 154]),
        (&[38, 110, 101, 120, 105, 115, 116, 115, 59], &[226, 136, 132]),
        (&[38, 110, 99, 121, 59], &[208, 189]),
        (&[38, 84, 99, 97, 114, 111, 110, 59], &[197, 164]),
        (&[38, 114, 101, 97, 108, 59], &[226, 132, 156]),
        (&[38, 108, 101, 103, 59], &[226, 139, 154]),
        (&[38, 122, 105, 103, 114, 97, 114, 114, 59], &[226, 135, 157]),
        (&[38, 105, 113, 117, 101, 115, 116, 59], &[194, 191]),
        (&[38, 117, 111, 112, 102, 59], &[240, 157, 149, 166]),
        (&[38, 110, 101, 100, 111, 116, 59], &[226, 137, 144, 204, 184]),
        (&[38, 110, 101, 97, 114, 114, 59], &[226, 134, 151]),
        (&[38, 121, 115, 99, 114, 59], &[240, 157, 147, 142]),
        (&[38, 76, 101, 115, 115, 84, 105, 108, 100, 101, 59], &[226, 137, 178]),
        (&[38, 98, 105, 103, 119, 101, 100, 103, 101, 59], &[226, 139, 128]),
        (&[38, 114, 98, 114, 107, 101, 59], &[226, 166, 140]),
        (&[38, 110, 101, 115, 105, 109, 59], &[226, 137, 130, 204, 184]),
        (&[38, 103, 116, 99, 105, 114, 59], &[226, 169, 186]),
        (&[38, 108, 115, 113, 117, 111, 59], &[226, 128, 152]),
        (&[38, 104, 111, 97, 114, 114, 59], &[226, 135, 191]),
        (&[38, 116, 105, 109, 101, 115, 59], &[195, 151]),
        (&[38, 76, 101, 102, 116, 82, 105, 103, 104, 116, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 142]),
        (&[38, 100, 105, 118, 59], &[195, 183]),
        (&[38, 85, 111, 112, 102, 59], &[240, 157, 149, 140]),
        (&[38, 68, 111, 116, 59], &[194, 168]),
        (&[38, 98, 111, 120, 68, 76, 59], &[226, 149, 151]),
        (&[38, 80, 104, 105, 59], &[206, 166]),
        (&[38, 110, 118, 108, 116, 59], &[60, 226, 131, 146]),
        (&[38, 109, 97, 112, 59], &[226, 134, 166]),
        (&[38, 85, 112, 112, 101, 114, 82, 105, 103, 104, 116, 65, 114, 114, 111, 119, 59], &[226, 134, 151]),
        (&[38, 114, 115, 113, 117, 111, 59], &[226, 128, 153]),
        (&[38, 111, 114, 118, 59], &[226, 169, 155]),
        (&[38, 110, 103, 101, 113, 113, 59], &[226, 137, 167, 204, 184]),
        (&[38, 98, 111, 120, 68, 82, 59], &[226, 149, 148]),
        (&[38, 65, 109, 97, 99, 114, 59], &[196, 128]),
        (&[38, 97, 117, 109, 108, 59], &[195, 164]),
        (&[38, 110, 105, 59], &[226, 136, 139]),
        (&[38, 103, 110, 101, 113, 59], &[226, 170, 136]),
        (&[38, 85, 110, 100, 101, 114, 66, 114, 97, 99, 101, 59], &[226, 143, 159]),
        (&[38, 98, 101, 112, 115, 105, 59], &[207, 182]),
        (&[38, 98, 111, 120, 86, 59], &[226, 149, 145]),
        (&[38, 115, 104, 111, 114, 116, 109, 105, 100, 59], &[226, 136, 163]),
        (&[38, 112, 114, 101, 99, 115, 105, 109, 59], &[226, 137, 190]),
        (&[38, 114, 99, 117, 98, 59], &[125]),
        (&[38, 71, 98, 114, 101, 118, 101, 59], &[196, 158]),
        (&[38, 100, 111, 116, 109, 105, 110, 117, 115, 59], &[226, 136, 184]),
        (&[38, 112, 114, 105, 109, 101, 115, 59], &[226, 132, 153]),
        (&[38, 90, 99, 121, 59], &[208, 151]),
        (&[38, 114, 72, 97, 114, 59], &[226, 165, 164]),
        (&[38, 76, 115, 104, 59], &[226, 134, 176]),
        (&[38, 104, 98, 97, 114, 59], &[226, 132, 143]),
        (&[38, 112, 97, 114, 97, 108, 108, 101, 108, 59], &[226, 136, 165]),
        (&[38, 114, 97, 114, 114, 98, 59], &[226, 135, 165]),
        (&[38, 108, 101, 102, 116, 108, 101, 102, 116, 97, 114, 114, 111, 119, 115, 59], &[226, 135, 135]),
        (&[38, 65, 97, 99, 117, 116, 101], &[195, 129]),
        (&[38, 108, 101, 102, 116, 97, 114, 114, 111, 119, 116, 97, 105, 108, 59], &[226, 134, 162]),
        (&[38, 110, 119, 65, 114, 114, 59], &[226, 135, 150]),
        (&[38, 98, 108, 97, 99, 107, 115, 113, 117, 97, 114, 101, 59], &[226, 150, 170]),
        (&[38, 99, 105, 114, 109, 105, 100, 59], &[226, 171, 175]),
        (&[38, 110, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 134, 155]),
        (&[38, 118, 97, 114, 115, 117, 112, 115, 101, 116, 110, 101, 113, 59], &[226, 138, 139, 239, 184, 128]),
        (&[38, 72, 117, 109, 112, 68, 111, 119, 110, 72, 117, 109, 112, 59], &[226, 137, 142]),
        (&[38, 110, 114, 97, 114, 114, 119, 59], &[226, 134, 157, 204, 184]),
        (&[38, 108, 111, 98, 114, 107, 59], &[226, 159, 166]),
        (&[38, 99, 99, 101, 100, 105, 108], &[195, 167]),
        (&[38, 98, 114, 101, 118, 101, 59], &[203, 152]),
        (&[38, 115, 101, 97, 114, 104, 107, 59], &[226, 164, 165]),
        (&[38, 82, 114, 105, 103, 104, 116, 97, 114, 114, 111, 119, 59], &[226, 135, 155]),
        (&[38, 112, 108, 117, 115, 99, 105, 114, 59], &[226, 168, 162]),
        (&[38, 110, 111, 116, 110, 105, 118, 99, 59], &[226, 139, 189]),
        (&[38, 114, 99, 97, 114, 111, 110, 59], &[197, 153]),
        (&[38, 99, 100, 111, 116, 59], &[196, 139]),
        (&[38, 105, 110, 116, 99, 97, 108, 59], &[226, 138, 186]),
        (&[38, 97, 114, 105, 110, 103], &[195, 165]),
        (&[38, 100, 101, 108, 116, 97, 59], &[206, 180]),
        (&[38, 114, 98, 114, 107, 115, 108, 100, 59], &[226, 166, 142]),
        (&[38, 103, 102, 114, 59], &[240, 157, 148, 164]),
        (&[38, 84, 72, 79, 82, 78, 59], &[195, 158]),
        (&[38, 86, 118, 100, 97, 115, 104, 59], &[226, 138, 170]),
        (&[38, 69, 84, 72, 59], &[195, 144]),
        (&[38, 78, 111, 116, 82, 105, 103, 104, 116, 84, 114, 105, 97, 110, 103, 108, 101, 66, 97, 114, 59], &[226, 167, 144, 204, 184]),
        (&[38, 73, 99, 105, 114, 99, 59], &[195, 142]),
        (&[38, 105, 115, 99, 114, 59], &[240, 157, 146, 190]),
        (&[38, 83, 105, 103, 109, 97, 59], &[206, 163]),
        (&[38, 103, 99, 105, 114, 99, 59], &[196, 157]),
        (&[38, 115, 113, 99, 97, 112, 59], &[226, 138, 147]),
        (&[38, 82, 105, 103, 104, 116, 68, 111, 117, 98, 108, 101, 66, 114, 97, 99, 107, 101, 116, 59], &[226, 159, 167]),
        (&[38, 102, 114, 97, 99, 53, 54, 59], &[226, 133, 154]),
        (&[38, 98, 111, 120, 118, 114, 59], &[226, 148, 156]),
        (&[38, 120, 111, 112, 108, 117, 115, 59], &[226, 168, 129]),
        (&[38, 82, 105, 103, 104, 116, 68, 111, 119, 110, 84, 101, 101, 86, 101, 99, 116, 111, 114, 59], &[226, 165, 157]),
        (&[38, 108, 97, 114, 114, 98, 59], &[226, 135, 164]),
        (&[38, 116, 104, 101, 116, 97, 115, 121, 109, 59], &[207, 145]),
        (&[38, 108, 65, 114, 114, 59], &[226, 135, 144]),
    ],
};

/// Length of longest entity including ‘&’ and possibly ‘;’.
pub const ENTITY_MAX_LENGTH: usize = 33;

/// Length of shortest entity including ‘&’ and possibly ‘;’.
pub const ENTITY_MIN_LENGTH: usize = 3;

/// Length of longest semicolon-less entity including ‘&’.
pub const BARE_ENTITY_MAX_LENGTH: usize = 7;
