// SPDX-License-Identifier: GPL-3.0-only

//! Base keysym dataset.
//!
//! Every symbol of the X11 `keysymdef.h` header (xorgproto 2024.1), in header
//! order, including the Unicode keysyms above `0xFFFF`. A character is
//! attached exactly where the header has a plain `/* U+XXXX ... */` comment.
//! Keys documented only in prose (`BackSpace`, `Return`) or with a bracketed
//! mapping (`KP_Space`, `enfilledcircbullet`) carry none.
//!
//! Order matters: when two records carry the same character, the later one
//! owns the character entry in [`KeysymTable`](super::KeysymTable). The header
//! has two such pairs, `radical`/`squareroot` and
//! `partialderivative`/`partdifferential`, where the Unicode keysym wins.

/// One dataset record: `(name, keysym, character)`.
pub type KeysymRecord = (&'static str, u32, Option<char>);

/// The base dataset, in construction order.
pub static KEYSYMDEF: &[KeysymRecord] = &[
    ("VoidSymbol", 0xffffff, None),
    // Miscellany
    ("BackSpace", 0xff08, None),
    ("Tab", 0xff09, None),
    ("Linefeed", 0xff0a, None),
    ("Clear", 0xff0b, None),
    ("Return", 0xff0d, None),
    ("Pause", 0xff13, None),
    ("Scroll_Lock", 0xff14, None),
    ("Sys_Req", 0xff15, None),
    ("Escape", 0xff1b, None),
    ("Delete", 0xffff, None),
    ("Multi_key", 0xff20, None),
    ("Codeinput", 0xff37, None),
    ("SingleCandidate", 0xff3c, None),
    ("MultipleCandidate", 0xff3d, None),
    ("PreviousCandidate", 0xff3e, None),
    ("Kanji", 0xff21, None),
    ("Muhenkan", 0xff22, None),
    ("Henkan_Mode", 0xff23, None),
    ("Henkan", 0xff23, None),
    ("Romaji", 0xff24, None),
    ("Hiragana", 0xff25, None),
    ("Katakana", 0xff26, None),
    ("Hiragana_Katakana", 0xff27, None),
    ("Zenkaku", 0xff28, None),
    ("Hankaku", 0xff29, None),
    ("Zenkaku_Hankaku", 0xff2a, None),
    ("Touroku", 0xff2b, None),
    ("Massyo", 0xff2c, None),
    ("Kana_Lock", 0xff2d, None),
    ("Kana_Shift", 0xff2e, None),
    ("Eisu_Shift", 0xff2f, None),
    ("Eisu_toggle", 0xff30, None),
    ("Kanji_Bangou", 0xff37, None),
    ("Zen_Koho", 0xff3d, None),
    ("Mae_Koho", 0xff3e, None),
    ("Home", 0xff50, None),
    ("Left", 0xff51, None),
    ("Up", 0xff52, None),
    ("Right", 0xff53, None),
    ("Down", 0xff54, None),
    ("Prior", 0xff55, None),
    ("Page_Up", 0xff55, None),
    ("Next", 0xff56, None),
    ("Page_Down", 0xff56, None),
    ("End", 0xff57, None),
    ("Begin", 0xff58, None),
    ("Select", 0xff60, None),
    ("Print", 0xff61, None),
    ("Execute", 0xff62, None),
    ("Insert", 0xff63, None),
    ("Undo", 0xff65, None),
    ("Redo", 0xff66, None),
    ("Menu", 0xff67, None),
    ("Find", 0xff68, None),
    ("Cancel", 0xff69, None),
    ("Help", 0xff6a, None),
    ("Break", 0xff6b, None),
    ("Mode_switch", 0xff7e, None),
    ("script_switch", 0xff7e, None),
    ("Num_Lock", 0xff7f, None),
    ("KP_Space", 0xff80, None),
    ("KP_Tab", 0xff89, None),
    ("KP_Enter", 0xff8d, None),
    ("KP_F1", 0xff91, None),
    ("KP_F2", 0xff92, None),
    ("KP_F3", 0xff93, None),
    ("KP_F4", 0xff94, None),
    ("KP_Home", 0xff95, None),
    ("KP_Left", 0xff96, None),
    ("KP_Up", 0xff97, None),
    ("KP_Right", 0xff98, None),
    ("KP_Down", 0xff99, None),
    ("KP_Prior", 0xff9a, None),
    ("KP_Page_Up", 0xff9a, None),
    ("KP_Next", 0xff9b, None),
    ("KP_Page_Down", 0xff9b, None),
    ("KP_End", 0xff9c, None),
    ("KP_Begin", 0xff9d, None),
    ("KP_Insert", 0xff9e, None),
    ("KP_Delete", 0xff9f, None),
    ("KP_Equal", 0xffbd, None),
    ("KP_Multiply", 0xffaa, None),
    ("KP_Add", 0xffab, None),
    ("KP_Separator", 0xffac, None),
    ("KP_Subtract", 0xffad, None),
    ("KP_Decimal", 0xffae, None),
    ("KP_Divide", 0xffaf, None),
    ("KP_0", 0xffb0, None),
    ("KP_1", 0xffb1, None),
    ("KP_2", 0xffb2, None),
    ("KP_3", 0xffb3, None),
    ("KP_4", 0xffb4, None),
    ("KP_5", 0xffb5, None),
    ("KP_6", 0xffb6, None),
    ("KP_7", 0xffb7, None),
    ("KP_8", 0xffb8, None),
    ("KP_9", 0xffb9, None),
    ("F1", 0xffbe, None),
    ("F2", 0xffbf, None),
    ("F3", 0xffc0, None),
    ("F4", 0xffc1, None),
    ("F5", 0xffc2, None),
    ("F6", 0xffc3, None),
    ("F7", 0xffc4, None),
    ("F8", 0xffc5, None),
    ("F9", 0xffc6, None),
    ("F10", 0xffc7, None),
    ("F11", 0xffc8, None),
    ("L1", 0xffc8, None),
    ("F12", 0xffc9, None),
    ("L2", 0xffc9, None),
    ("F13", 0xffca, None),
    ("L3", 0xffca, None),
    ("F14", 0xffcb, None),
    ("L4", 0xffcb, None),
    ("F15", 0xffcc, None),
    ("L5", 0xffcc, None),
    ("F16", 0xffcd, None),
    ("L6", 0xffcd, None),
    ("F17", 0xffce, None),
    ("L7", 0xffce, None),
    ("F18", 0xffcf, None),
    ("L8", 0xffcf, None),
    ("F19", 0xffd0, None),
    ("L9", 0xffd0, None),
    ("F20", 0xffd1, None),
    ("L10", 0xffd1, None),
    ("F21", 0xffd2, None),
    ("R1", 0xffd2, None),
    ("F22", 0xffd3, None),
    ("R2", 0xffd3, None),
    ("F23", 0xffd4, None),
    ("R3", 0xffd4, None),
    ("F24", 0xffd5, None),
    ("R4", 0xffd5, None),
    ("F25", 0xffd6, None),
    ("R5", 0xffd6, None),
    ("F26", 0xffd7, None),
    ("R6", 0xffd7, None),
    ("F27", 0xffd8, None),
    ("R7", 0xffd8, None),
    ("F28", 0xffd9, None),
    ("R8", 0xffd9, None),
    ("F29", 0xffda, None),
    ("R9", 0xffda, None),
    ("F30", 0xffdb, None),
    ("R10", 0xffdb, None),
    ("F31", 0xffdc, None),
    ("R11", 0xffdc, None),
    ("F32", 0xffdd, None),
    ("R12", 0xffdd, None),
    ("F33", 0xffde, None),
    ("R13", 0xffde, None),
    ("F34", 0xffdf, None),
    ("R14", 0xffdf, None),
    ("F35", 0xffe0, None),
    ("R15", 0xffe0, None),
    ("Shift_L", 0xffe1, None),
    ("Shift_R", 0xffe2, None),
    ("Control_L", 0xffe3, None),
    ("Control_R", 0xffe4, None),
    ("Caps_Lock", 0xffe5, None),
    ("Shift_Lock", 0xffe6, None),
    ("Meta_L", 0xffe7, None),
    ("Meta_R", 0xffe8, None),
    ("Alt_L", 0xffe9, None),
    ("Alt_R", 0xffea, None),
    ("Super_L", 0xffeb, None),
    ("Super_R", 0xffec, None),
    ("Hyper_L", 0xffed, None),
    ("Hyper_R", 0xffee, None),
    // XKB and ISO 9995 keys
    ("ISO_Lock", 0xfe01, None),
    ("ISO_Level2_Latch", 0xfe02, None),
    ("ISO_Level3_Shift", 0xfe03, None),
    ("ISO_Level3_Latch", 0xfe04, None),
    ("ISO_Level3_Lock", 0xfe05, None),
    ("ISO_Level5_Shift", 0xfe11, None),
    ("ISO_Level5_Latch", 0xfe12, None),
    ("ISO_Level5_Lock", 0xfe13, None),
    ("ISO_Group_Shift", 0xff7e, None),
    ("ISO_Group_Latch", 0xfe06, None),
    ("ISO_Group_Lock", 0xfe07, None),
    ("ISO_Next_Group", 0xfe08, None),
    ("ISO_Next_Group_Lock", 0xfe09, None),
    ("ISO_Prev_Group", 0xfe0a, None),
    ("ISO_Prev_Group_Lock", 0xfe0b, None),
    ("ISO_First_Group", 0xfe0c, None),
    ("ISO_First_Group_Lock", 0xfe0d, None),
    ("ISO_Last_Group", 0xfe0e, None),
    ("ISO_Last_Group_Lock", 0xfe0f, None),
    ("ISO_Left_Tab", 0xfe20, None),
    ("ISO_Move_Line_Up", 0xfe21, None),
    ("ISO_Move_Line_Down", 0xfe22, None),
    ("ISO_Partial_Line_Up", 0xfe23, None),
    ("ISO_Partial_Line_Down", 0xfe24, None),
    ("ISO_Partial_Space_Left", 0xfe25, None),
    ("ISO_Partial_Space_Right", 0xfe26, None),
    ("ISO_Set_Margin_Left", 0xfe27, None),
    ("ISO_Set_Margin_Right", 0xfe28, None),
    ("ISO_Release_Margin_Left", 0xfe29, None),
    ("ISO_Release_Margin_Right", 0xfe2a, None),
    ("ISO_Release_Both_Margins", 0xfe2b, None),
    ("ISO_Fast_Cursor_Left", 0xfe2c, None),
    ("ISO_Fast_Cursor_Right", 0xfe2d, None),
    ("ISO_Fast_Cursor_Up", 0xfe2e, None),
    ("ISO_Fast_Cursor_Down", 0xfe2f, None),
    ("ISO_Continuous_Underline", 0xfe30, None),
    ("ISO_Discontinuous_Underline", 0xfe31, None),
    ("ISO_Emphasize", 0xfe32, None),
    ("ISO_Center_Object", 0xfe33, None),
    ("ISO_Enter", 0xfe34, None),
    ("dead_grave", 0xfe50, None),
    ("dead_acute", 0xfe51, None),
    ("dead_circumflex", 0xfe52, None),
    ("dead_tilde", 0xfe53, None),
    ("dead_perispomeni", 0xfe53, None),
    ("dead_macron", 0xfe54, None),
    ("dead_breve", 0xfe55, None),
    ("dead_abovedot", 0xfe56, None),
    ("dead_diaeresis", 0xfe57, None),
    ("dead_abovering", 0xfe58, None),
    ("dead_doubleacute", 0xfe59, None),
    ("dead_caron", 0xfe5a, None),
    ("dead_cedilla", 0xfe5b, None),
    ("dead_ogonek", 0xfe5c, None),
    ("dead_iota", 0xfe5d, None),
    ("dead_voiced_sound", 0xfe5e, None),
    ("dead_semivoiced_sound", 0xfe5f, None),
    ("dead_belowdot", 0xfe60, None),
    ("dead_hook", 0xfe61, None),
    ("dead_horn", 0xfe62, None),
    ("dead_stroke", 0xfe63, None),
    ("dead_abovecomma", 0xfe64, None),
    ("dead_psili", 0xfe64, None),
    ("dead_abovereversedcomma", 0xfe65, None),
    ("dead_dasia", 0xfe65, None),
    ("dead_doublegrave", 0xfe66, None),
    ("dead_belowring", 0xfe67, None),
    ("dead_belowmacron", 0xfe68, None),
    ("dead_belowcircumflex", 0xfe69, None),
    ("dead_belowtilde", 0xfe6a, None),
    ("dead_belowbreve", 0xfe6b, None),
    ("dead_belowdiaeresis", 0xfe6c, None),
    ("dead_invertedbreve", 0xfe6d, None),
    ("dead_belowcomma", 0xfe6e, None),
    ("dead_currency", 0xfe6f, None),
    ("dead_lowline", 0xfe90, None),
    ("dead_aboveverticalline", 0xfe91, None),
    ("dead_belowverticalline", 0xfe92, None),
    ("dead_longsolidusoverlay", 0xfe93, None),
    ("dead_a", 0xfe80, None),
    ("dead_A", 0xfe81, None),
    ("dead_e", 0xfe82, None),
    ("dead_E", 0xfe83, None),
    ("dead_i", 0xfe84, None),
    ("dead_I", 0xfe85, None),
    ("dead_o", 0xfe86, None),
    ("dead_O", 0xfe87, None),
    ("dead_u", 0xfe88, None),
    ("dead_U", 0xfe89, None),
    ("dead_small_schwa", 0xfe8a, None),
    ("dead_capital_schwa", 0xfe8b, None),
    ("dead_greek", 0xfe8c, None),
    ("First_Virtual_Screen", 0xfed0, None),
    ("Prev_Virtual_Screen", 0xfed1, None),
    ("Next_Virtual_Screen", 0xfed2, None),
    ("Last_Virtual_Screen", 0xfed4, None),
    ("Terminate_Server", 0xfed5, None),
    ("AccessX_Enable", 0xfe70, None),
    ("AccessX_Feedback_Enable", 0xfe71, None),
    ("RepeatKeys_Enable", 0xfe72, None),
    ("SlowKeys_Enable", 0xfe73, None),
    ("BounceKeys_Enable", 0xfe74, None),
    ("StickyKeys_Enable", 0xfe75, None),
    ("MouseKeys_Enable", 0xfe76, None),
    ("MouseKeys_Accel_Enable", 0xfe77, None),
    ("Overlay1_Enable", 0xfe78, None),
    ("Overlay2_Enable", 0xfe79, None),
    ("AudibleBell_Enable", 0xfe7a, None),
    ("Pointer_Left", 0xfee0, None),
    ("Pointer_Right", 0xfee1, None),
    ("Pointer_Up", 0xfee2, None),
    ("Pointer_Down", 0xfee3, None),
    ("Pointer_UpLeft", 0xfee4, None),
    ("Pointer_UpRight", 0xfee5, None),
    ("Pointer_DownLeft", 0xfee6, None),
    ("Pointer_DownRight", 0xfee7, None),
    ("Pointer_Button_Dflt", 0xfee8, None),
    ("Pointer_Button1", 0xfee9, None),
    ("Pointer_Button2", 0xfeea, None),
    ("Pointer_Button3", 0xfeeb, None),
    ("Pointer_Button4", 0xfeec, None),
    ("Pointer_Button5", 0xfeed, None),
    ("Pointer_DblClick_Dflt", 0xfeee, None),
    ("Pointer_DblClick1", 0xfeef, None),
    ("Pointer_DblClick2", 0xfef0, None),
    ("Pointer_DblClick3", 0xfef1, None),
    ("Pointer_DblClick4", 0xfef2, None),
    ("Pointer_DblClick5", 0xfef3, None),
    ("Pointer_Drag_Dflt", 0xfef4, None),
    ("Pointer_Drag1", 0xfef5, None),
    ("Pointer_Drag2", 0xfef6, None),
    ("Pointer_Drag3", 0xfef7, None),
    ("Pointer_Drag4", 0xfef8, None),
    ("Pointer_Drag5", 0xfefd, None),
    ("Pointer_EnableKeys", 0xfef9, None),
    ("Pointer_Accelerate", 0xfefa, None),
    ("Pointer_DfltBtnNext", 0xfefb, None),
    ("Pointer_DfltBtnPrev", 0xfefc, None),
    ("ch", 0xfea0, None),
    ("Ch", 0xfea1, None),
    ("CH", 0xfea2, None),
    ("c_h", 0xfea3, None),
    ("C_h", 0xfea4, None),
    ("C_H", 0xfea5, None),
    // 3270 terminal keys
    ("3270_Duplicate", 0xfd01, None),
    ("3270_FieldMark", 0xfd02, None),
    ("3270_Right2", 0xfd03, None),
    ("3270_Left2", 0xfd04, None),
    ("3270_BackTab", 0xfd05, None),
    ("3270_EraseEOF", 0xfd06, None),
    ("3270_EraseInput", 0xfd07, None),
    ("3270_Reset", 0xfd08, None),
    ("3270_Quit", 0xfd09, None),
    ("3270_PA1", 0xfd0a, None),
    ("3270_PA2", 0xfd0b, None),
    ("3270_PA3", 0xfd0c, None),
    ("3270_Test", 0xfd0d, None),
    ("3270_Attn", 0xfd0e, None),
    ("3270_CursorBlink", 0xfd0f, None),
    ("3270_AltCursor", 0xfd10, None),
    ("3270_KeyClick", 0xfd11, None),
    ("3270_Jump", 0xfd12, None),
    ("3270_Ident", 0xfd13, None),
    ("3270_Rule", 0xfd14, None),
    ("3270_Copy", 0xfd15, None),
    ("3270_Play", 0xfd16, None),
    ("3270_Setup", 0xfd17, None),
    ("3270_Record", 0xfd18, None),
    ("3270_ChangeScreen", 0xfd19, None),
    ("3270_DeleteWord", 0xfd1a, None),
    ("3270_ExSelect", 0xfd1b, None),
    ("3270_CursorSelect", 0xfd1c, None),
    ("3270_PrintScreen", 0xfd1d, None),
    ("3270_Enter", 0xfd1e, None),
    // Latin 1
    ("space", 0x0020, Some(' ')),
    ("exclam", 0x0021, Some('!')),
    ("quotedbl", 0x0022, Some('"')),
    ("numbersign", 0x0023, Some('#')),
    ("dollar", 0x0024, Some('$')),
    ("percent", 0x0025, Some('%')),
    ("ampersand", 0x0026, Some('&')),
    ("apostrophe", 0x0027, Some('\'')),
    ("quoteright", 0x0027, None),
    ("parenleft", 0x0028, Some('(')),
    ("parenright", 0x0029, Some(')')),
    ("asterisk", 0x002a, Some('*')),
    ("plus", 0x002b, Some('+')),
    ("comma", 0x002c, Some(',')),
    ("minus", 0x002d, Some('-')),
    ("period", 0x002e, Some('.')),
    ("slash", 0x002f, Some('/')),
    ("0", 0x0030, Some('0')),
    ("1", 0x0031, Some('1')),
    ("2", 0x0032, Some('2')),
    ("3", 0x0033, Some('3')),
    ("4", 0x0034, Some('4')),
    ("5", 0x0035, Some('5')),
    ("6", 0x0036, Some('6')),
    ("7", 0x0037, Some('7')),
    ("8", 0x0038, Some('8')),
    ("9", 0x0039, Some('9')),
    ("colon", 0x003a, Some(':')),
    ("semicolon", 0x003b, Some(';')),
    ("less", 0x003c, Some('<')),
    ("equal", 0x003d, Some('=')),
    ("greater", 0x003e, Some('>')),
    ("question", 0x003f, Some('?')),
    ("at", 0x0040, Some('@')),
    ("A", 0x0041, Some('A')),
    ("B", 0x0042, Some('B')),
    ("C", 0x0043, Some('C')),
    ("D", 0x0044, Some('D')),
    ("E", 0x0045, Some('E')),
    ("F", 0x0046, Some('F')),
    ("G", 0x0047, Some('G')),
    ("H", 0x0048, Some('H')),
    ("I", 0x0049, Some('I')),
    ("J", 0x004a, Some('J')),
    ("K", 0x004b, Some('K')),
    ("L", 0x004c, Some('L')),
    ("M", 0x004d, Some('M')),
    ("N", 0x004e, Some('N')),
    ("O", 0x004f, Some('O')),
    ("P", 0x0050, Some('P')),
    ("Q", 0x0051, Some('Q')),
    ("R", 0x0052, Some('R')),
    ("S", 0x0053, Some('S')),
    ("T", 0x0054, Some('T')),
    ("U", 0x0055, Some('U')),
    ("V", 0x0056, Some('V')),
    ("W", 0x0057, Some('W')),
    ("X", 0x0058, Some('X')),
    ("Y", 0x0059, Some('Y')),
    ("Z", 0x005a, Some('Z')),
    ("bracketleft", 0x005b, Some('[')),
    ("backslash", 0x005c, Some('\\')),
    ("bracketright", 0x005d, Some(']')),
    ("asciicircum", 0x005e, Some('^')),
    ("underscore", 0x005f, Some('_')),
    ("grave", 0x0060, Some('`')),
    ("quoteleft", 0x0060, None),
    ("a", 0x0061, Some('a')),
    ("b", 0x0062, Some('b')),
    ("c", 0x0063, Some('c')),
    ("d", 0x0064, Some('d')),
    ("e", 0x0065, Some('e')),
    ("f", 0x0066, Some('f')),
    ("g", 0x0067, Some('g')),
    ("h", 0x0068, Some('h')),
    ("i", 0x0069, Some('i')),
    ("j", 0x006a, Some('j')),
    ("k", 0x006b, Some('k')),
    ("l", 0x006c, Some('l')),
    ("m", 0x006d, Some('m')),
    ("n", 0x006e, Some('n')),
    ("o", 0x006f, Some('o')),
    ("p", 0x0070, Some('p')),
    ("q", 0x0071, Some('q')),
    ("r", 0x0072, Some('r')),
    ("s", 0x0073, Some('s')),
    ("t", 0x0074, Some('t')),
    ("u", 0x0075, Some('u')),
    ("v", 0x0076, Some('v')),
    ("w", 0x0077, Some('w')),
    ("x", 0x0078, Some('x')),
    ("y", 0x0079, Some('y')),
    ("z", 0x007a, Some('z')),
    ("braceleft", 0x007b, Some('{')),
    ("bar", 0x007c, Some('|')),
    ("braceright", 0x007d, Some('}')),
    ("asciitilde", 0x007e, Some('~')),
    ("nobreakspace", 0x00a0, Some('\u{a0}')),
    ("exclamdown", 0x00a1, Some('¡')),
    ("cent", 0x00a2, Some('¢')),
    ("sterling", 0x00a3, Some('£')),
    ("currency", 0x00a4, Some('¤')),
    ("yen", 0x00a5, Some('¥')),
    ("brokenbar", 0x00a6, Some('¦')),
    ("section", 0x00a7, Some('§')),
    ("diaeresis", 0x00a8, Some('¨')),
    ("copyright", 0x00a9, Some('©')),
    ("ordfeminine", 0x00aa, Some('ª')),
    ("guillemotleft", 0x00ab, Some('«')),
    ("notsign", 0x00ac, Some('¬')),
    ("hyphen", 0x00ad, Some('\u{ad}')),
    ("registered", 0x00ae, Some('®')),
    ("macron", 0x00af, Some('¯')),
    ("degree", 0x00b0, Some('°')),
    ("plusminus", 0x00b1, Some('±')),
    ("twosuperior", 0x00b2, Some('²')),
    ("threesuperior", 0x00b3, Some('³')),
    ("acute", 0x00b4, Some('´')),
    ("mu", 0x00b5, Some('µ')),
    ("paragraph", 0x00b6, Some('¶')),
    ("periodcentered", 0x00b7, Some('·')),
    ("cedilla", 0x00b8, Some('¸')),
    ("onesuperior", 0x00b9, Some('¹')),
    ("masculine", 0x00ba, Some('º')),
    ("guillemotright", 0x00bb, Some('»')),
    ("onequarter", 0x00bc, Some('¼')),
    ("onehalf", 0x00bd, Some('½')),
    ("threequarters", 0x00be, Some('¾')),
    ("questiondown", 0x00bf, Some('¿')),
    ("Agrave", 0x00c0, Some('À')),
    ("Aacute", 0x00c1, Some('Á')),
    ("Acircumflex", 0x00c2, Some('Â')),
    ("Atilde", 0x00c3, Some('Ã')),
    ("Adiaeresis", 0x00c4, Some('Ä')),
    ("Aring", 0x00c5, Some('Å')),
    ("AE", 0x00c6, Some('Æ')),
    ("Ccedilla", 0x00c7, Some('Ç')),
    ("Egrave", 0x00c8, Some('È')),
    ("Eacute", 0x00c9, Some('É')),
    ("Ecircumflex", 0x00ca, Some('Ê')),
    ("Ediaeresis", 0x00cb, Some('Ë')),
    ("Igrave", 0x00cc, Some('Ì')),
    ("Iacute", 0x00cd, Some('Í')),
    ("Icircumflex", 0x00ce, Some('Î')),
    ("Idiaeresis", 0x00cf, Some('Ï')),
    ("ETH", 0x00d0, Some('Ð')),
    ("Eth", 0x00d0, None),
    ("Ntilde", 0x00d1, Some('Ñ')),
    ("Ograve", 0x00d2, Some('Ò')),
    ("Oacute", 0x00d3, Some('Ó')),
    ("Ocircumflex", 0x00d4, Some('Ô')),
    ("Otilde", 0x00d5, Some('Õ')),
    ("Odiaeresis", 0x00d6, Some('Ö')),
    ("multiply", 0x00d7, Some('×')),
    ("Oslash", 0x00d8, Some('Ø')),
    ("Ooblique", 0x00d8, Some('Ø')),
    ("Ugrave", 0x00d9, Some('Ù')),
    ("Uacute", 0x00da, Some('Ú')),
    ("Ucircumflex", 0x00db, Some('Û')),
    ("Udiaeresis", 0x00dc, Some('Ü')),
    ("Yacute", 0x00dd, Some('Ý')),
    ("THORN", 0x00de, Some('Þ')),
    ("Thorn", 0x00de, None),
    ("ssharp", 0x00df, Some('ß')),
    ("agrave", 0x00e0, Some('à')),
    ("aacute", 0x00e1, Some('á')),
    ("acircumflex", 0x00e2, Some('â')),
    ("atilde", 0x00e3, Some('ã')),
    ("adiaeresis", 0x00e4, Some('ä')),
    ("aring", 0x00e5, Some('å')),
    ("ae", 0x00e6, Some('æ')),
    ("ccedilla", 0x00e7, Some('ç')),
    ("egrave", 0x00e8, Some('è')),
    ("eacute", 0x00e9, Some('é')),
    ("ecircumflex", 0x00ea, Some('ê')),
    ("ediaeresis", 0x00eb, Some('ë')),
    ("igrave", 0x00ec, Some('ì')),
    ("iacute", 0x00ed, Some('í')),
    ("icircumflex", 0x00ee, Some('î')),
    ("idiaeresis", 0x00ef, Some('ï')),
    ("eth", 0x00f0, Some('ð')),
    ("ntilde", 0x00f1, Some('ñ')),
    ("ograve", 0x00f2, Some('ò')),
    ("oacute", 0x00f3, Some('ó')),
    ("ocircumflex", 0x00f4, Some('ô')),
    ("otilde", 0x00f5, Some('õ')),
    ("odiaeresis", 0x00f6, Some('ö')),
    ("division", 0x00f7, Some('÷')),
    ("oslash", 0x00f8, Some('ø')),
    ("ooblique", 0x00f8, Some('ø')),
    ("ugrave", 0x00f9, Some('ù')),
    ("uacute", 0x00fa, Some('ú')),
    ("ucircumflex", 0x00fb, Some('û')),
    ("udiaeresis", 0x00fc, Some('ü')),
    ("yacute", 0x00fd, Some('ý')),
    ("thorn", 0x00fe, Some('þ')),
    ("ydiaeresis", 0x00ff, Some('ÿ')),
    // Latin 2
    ("Aogonek", 0x01a1, Some('Ą')),
    ("breve", 0x01a2, Some('˘')),
    ("Lstroke", 0x01a3, Some('Ł')),
    ("Lcaron", 0x01a5, Some('Ľ')),
    ("Sacute", 0x01a6, Some('Ś')),
    ("Scaron", 0x01a9, Some('Š')),
    ("Scedilla", 0x01aa, Some('Ş')),
    ("Tcaron", 0x01ab, Some('Ť')),
    ("Zacute", 0x01ac, Some('Ź')),
    ("Zcaron", 0x01ae, Some('Ž')),
    ("Zabovedot", 0x01af, Some('Ż')),
    ("aogonek", 0x01b1, Some('ą')),
    ("ogonek", 0x01b2, Some('˛')),
    ("lstroke", 0x01b3, Some('ł')),
    ("lcaron", 0x01b5, Some('ľ')),
    ("sacute", 0x01b6, Some('ś')),
    ("caron", 0x01b7, Some('ˇ')),
    ("scaron", 0x01b9, Some('š')),
    ("scedilla", 0x01ba, Some('ş')),
    ("tcaron", 0x01bb, Some('ť')),
    ("zacute", 0x01bc, Some('ź')),
    ("doubleacute", 0x01bd, Some('˝')),
    ("zcaron", 0x01be, Some('ž')),
    ("zabovedot", 0x01bf, Some('ż')),
    ("Racute", 0x01c0, Some('Ŕ')),
    ("Abreve", 0x01c3, Some('Ă')),
    ("Lacute", 0x01c5, Some('Ĺ')),
    ("Cacute", 0x01c6, Some('Ć')),
    ("Ccaron", 0x01c8, Some('Č')),
    ("Eogonek", 0x01ca, Some('Ę')),
    ("Ecaron", 0x01cc, Some('Ě')),
    ("Dcaron", 0x01cf, Some('Ď')),
    ("Dstroke", 0x01d0, Some('Đ')),
    ("Nacute", 0x01d1, Some('Ń')),
    ("Ncaron", 0x01d2, Some('Ň')),
    ("Odoubleacute", 0x01d5, Some('Ő')),
    ("Rcaron", 0x01d8, Some('Ř')),
    ("Uring", 0x01d9, Some('Ů')),
    ("Udoubleacute", 0x01db, Some('Ű')),
    ("Tcedilla", 0x01de, Some('Ţ')),
    ("racute", 0x01e0, Some('ŕ')),
    ("abreve", 0x01e3, Some('ă')),
    ("lacute", 0x01e5, Some('ĺ')),
    ("cacute", 0x01e6, Some('ć')),
    ("ccaron", 0x01e8, Some('č')),
    ("eogonek", 0x01ea, Some('ę')),
    ("ecaron", 0x01ec, Some('ě')),
    ("dcaron", 0x01ef, Some('ď')),
    ("dstroke", 0x01f0, Some('đ')),
    ("nacute", 0x01f1, Some('ń')),
    ("ncaron", 0x01f2, Some('ň')),
    ("odoubleacute", 0x01f5, Some('ő')),
    ("rcaron", 0x01f8, Some('ř')),
    ("uring", 0x01f9, Some('ů')),
    ("udoubleacute", 0x01fb, Some('ű')),
    ("tcedilla", 0x01fe, Some('ţ')),
    ("abovedot", 0x01ff, Some('˙')),
    // Latin 3
    ("Hstroke", 0x02a1, Some('Ħ')),
    ("Hcircumflex", 0x02a6, Some('Ĥ')),
    ("Iabovedot", 0x02a9, Some('İ')),
    ("Gbreve", 0x02ab, Some('Ğ')),
    ("Jcircumflex", 0x02ac, Some('Ĵ')),
    ("hstroke", 0x02b1, Some('ħ')),
    ("hcircumflex", 0x02b6, Some('ĥ')),
    ("idotless", 0x02b9, Some('ı')),
    ("gbreve", 0x02bb, Some('ğ')),
    ("jcircumflex", 0x02bc, Some('ĵ')),
    ("Cabovedot", 0x02c5, Some('Ċ')),
    ("Ccircumflex", 0x02c6, Some('Ĉ')),
    ("Gabovedot", 0x02d5, Some('Ġ')),
    ("Gcircumflex", 0x02d8, Some('Ĝ')),
    ("Ubreve", 0x02dd, Some('Ŭ')),
    ("Scircumflex", 0x02de, Some('Ŝ')),
    ("cabovedot", 0x02e5, Some('ċ')),
    ("ccircumflex", 0x02e6, Some('ĉ')),
    ("gabovedot", 0x02f5, Some('ġ')),
    ("gcircumflex", 0x02f8, Some('ĝ')),
    ("ubreve", 0x02fd, Some('ŭ')),
    ("scircumflex", 0x02fe, Some('ŝ')),
    // Latin 4
    ("kra", 0x03a2, Some('ĸ')),
    ("kappa", 0x03a2, None),
    ("Rcedilla", 0x03a3, Some('Ŗ')),
    ("Itilde", 0x03a5, Some('Ĩ')),
    ("Lcedilla", 0x03a6, Some('Ļ')),
    ("Emacron", 0x03aa, Some('Ē')),
    ("Gcedilla", 0x03ab, Some('Ģ')),
    ("Tslash", 0x03ac, Some('Ŧ')),
    ("rcedilla", 0x03b3, Some('ŗ')),
    ("itilde", 0x03b5, Some('ĩ')),
    ("lcedilla", 0x03b6, Some('ļ')),
    ("emacron", 0x03ba, Some('ē')),
    ("gcedilla", 0x03bb, Some('ģ')),
    ("tslash", 0x03bc, Some('ŧ')),
    ("ENG", 0x03bd, Some('Ŋ')),
    ("eng", 0x03bf, Some('ŋ')),
    ("Amacron", 0x03c0, Some('Ā')),
    ("Iogonek", 0x03c7, Some('Į')),
    ("Eabovedot", 0x03cc, Some('Ė')),
    ("Imacron", 0x03cf, Some('Ī')),
    ("Ncedilla", 0x03d1, Some('Ņ')),
    ("Omacron", 0x03d2, Some('Ō')),
    ("Kcedilla", 0x03d3, Some('Ķ')),
    ("Uogonek", 0x03d9, Some('Ų')),
    ("Utilde", 0x03dd, Some('Ũ')),
    ("Umacron", 0x03de, Some('Ū')),
    ("amacron", 0x03e0, Some('ā')),
    ("iogonek", 0x03e7, Some('į')),
    ("eabovedot", 0x03ec, Some('ė')),
    ("imacron", 0x03ef, Some('ī')),
    ("ncedilla", 0x03f1, Some('ņ')),
    ("omacron", 0x03f2, Some('ō')),
    ("kcedilla", 0x03f3, Some('ķ')),
    ("uogonek", 0x03f9, Some('ų')),
    ("utilde", 0x03fd, Some('ũ')),
    ("umacron", 0x03fe, Some('ū')),
    // Latin 8
    ("Wcircumflex", 0x1000174, Some('Ŵ')),
    ("wcircumflex", 0x1000175, Some('ŵ')),
    ("Ycircumflex", 0x1000176, Some('Ŷ')),
    ("ycircumflex", 0x1000177, Some('ŷ')),
    ("Babovedot", 0x1001e02, Some('Ḃ')),
    ("babovedot", 0x1001e03, Some('ḃ')),
    ("Dabovedot", 0x1001e0a, Some('Ḋ')),
    ("dabovedot", 0x1001e0b, Some('ḋ')),
    ("Fabovedot", 0x1001e1e, Some('Ḟ')),
    ("fabovedot", 0x1001e1f, Some('ḟ')),
    ("Mabovedot", 0x1001e40, Some('Ṁ')),
    ("mabovedot", 0x1001e41, Some('ṁ')),
    ("Pabovedot", 0x1001e56, Some('Ṗ')),
    ("pabovedot", 0x1001e57, Some('ṗ')),
    ("Sabovedot", 0x1001e60, Some('Ṡ')),
    ("sabovedot", 0x1001e61, Some('ṡ')),
    ("Tabovedot", 0x1001e6a, Some('Ṫ')),
    ("tabovedot", 0x1001e6b, Some('ṫ')),
    ("Wgrave", 0x1001e80, Some('Ẁ')),
    ("wgrave", 0x1001e81, Some('ẁ')),
    ("Wacute", 0x1001e82, Some('Ẃ')),
    ("wacute", 0x1001e83, Some('ẃ')),
    ("Wdiaeresis", 0x1001e84, Some('Ẅ')),
    ("wdiaeresis", 0x1001e85, Some('ẅ')),
    ("Ygrave", 0x1001ef2, Some('Ỳ')),
    ("ygrave", 0x1001ef3, Some('ỳ')),
    // Latin 9
    ("OE", 0x13bc, Some('Œ')),
    ("oe", 0x13bd, Some('œ')),
    ("Ydiaeresis", 0x13be, Some('Ÿ')),
    // Katakana
    ("overline", 0x047e, Some('‾')),
    ("kana_fullstop", 0x04a1, Some('。')),
    ("kana_openingbracket", 0x04a2, Some('「')),
    ("kana_closingbracket", 0x04a3, Some('」')),
    ("kana_comma", 0x04a4, Some('、')),
    ("kana_conjunctive", 0x04a5, Some('・')),
    ("kana_middledot", 0x04a5, None),
    ("kana_WO", 0x04a6, Some('ヲ')),
    ("kana_a", 0x04a7, Some('ァ')),
    ("kana_i", 0x04a8, Some('ィ')),
    ("kana_u", 0x04a9, Some('ゥ')),
    ("kana_e", 0x04aa, Some('ェ')),
    ("kana_o", 0x04ab, Some('ォ')),
    ("kana_ya", 0x04ac, Some('ャ')),
    ("kana_yu", 0x04ad, Some('ュ')),
    ("kana_yo", 0x04ae, Some('ョ')),
    ("kana_tsu", 0x04af, Some('ッ')),
    ("kana_tu", 0x04af, None),
    ("prolongedsound", 0x04b0, Some('ー')),
    ("kana_A", 0x04b1, Some('ア')),
    ("kana_I", 0x04b2, Some('イ')),
    ("kana_U", 0x04b3, Some('ウ')),
    ("kana_E", 0x04b4, Some('エ')),
    ("kana_O", 0x04b5, Some('オ')),
    ("kana_KA", 0x04b6, Some('カ')),
    ("kana_KI", 0x04b7, Some('キ')),
    ("kana_KU", 0x04b8, Some('ク')),
    ("kana_KE", 0x04b9, Some('ケ')),
    ("kana_KO", 0x04ba, Some('コ')),
    ("kana_SA", 0x04bb, Some('サ')),
    ("kana_SHI", 0x04bc, Some('シ')),
    ("kana_SU", 0x04bd, Some('ス')),
    ("kana_SE", 0x04be, Some('セ')),
    ("kana_SO", 0x04bf, Some('ソ')),
    ("kana_TA", 0x04c0, Some('タ')),
    ("kana_CHI", 0x04c1, Some('チ')),
    ("kana_TI", 0x04c1, None),
    ("kana_TSU", 0x04c2, Some('ツ')),
    ("kana_TU", 0x04c2, None),
    ("kana_TE", 0x04c3, Some('テ')),
    ("kana_TO", 0x04c4, Some('ト')),
    ("kana_NA", 0x04c5, Some('ナ')),
    ("kana_NI", 0x04c6, Some('ニ')),
    ("kana_NU", 0x04c7, Some('ヌ')),
    ("kana_NE", 0x04c8, Some('ネ')),
    ("kana_NO", 0x04c9, Some('ノ')),
    ("kana_HA", 0x04ca, Some('ハ')),
    ("kana_HI", 0x04cb, Some('ヒ')),
    ("kana_FU", 0x04cc, Some('フ')),
    ("kana_HU", 0x04cc, None),
    ("kana_HE", 0x04cd, Some('ヘ')),
    ("kana_HO", 0x04ce, Some('ホ')),
    ("kana_MA", 0x04cf, Some('マ')),
    ("kana_MI", 0x04d0, Some('ミ')),
    ("kana_MU", 0x04d1, Some('ム')),
    ("kana_ME", 0x04d2, Some('メ')),
    ("kana_MO", 0x04d3, Some('モ')),
    ("kana_YA", 0x04d4, Some('ヤ')),
    ("kana_YU", 0x04d5, Some('ユ')),
    ("kana_YO", 0x04d6, Some('ヨ')),
    ("kana_RA", 0x04d7, Some('ラ')),
    ("kana_RI", 0x04d8, Some('リ')),
    ("kana_RU", 0x04d9, Some('ル')),
    ("kana_RE", 0x04da, Some('レ')),
    ("kana_RO", 0x04db, Some('ロ')),
    ("kana_WA", 0x04dc, Some('ワ')),
    ("kana_N", 0x04dd, Some('ン')),
    ("voicedsound", 0x04de, Some('゛')),
    ("semivoicedsound", 0x04df, Some('゜')),
    ("kana_switch", 0xff7e, None),
    // Arabic
    ("Farsi_0", 0x10006f0, Some('۰')),
    ("Farsi_1", 0x10006f1, Some('۱')),
    ("Farsi_2", 0x10006f2, Some('۲')),
    ("Farsi_3", 0x10006f3, Some('۳')),
    ("Farsi_4", 0x10006f4, Some('۴')),
    ("Farsi_5", 0x10006f5, Some('۵')),
    ("Farsi_6", 0x10006f6, Some('۶')),
    ("Farsi_7", 0x10006f7, Some('۷')),
    ("Farsi_8", 0x10006f8, Some('۸')),
    ("Farsi_9", 0x10006f9, Some('۹')),
    ("Arabic_percent", 0x100066a, Some('٪')),
    ("Arabic_superscript_alef", 0x1000670, Some('\u{670}')),
    ("Arabic_tteh", 0x1000679, Some('\u{679}')),
    ("Arabic_peh", 0x100067e, Some('\u{67e}')),
    ("Arabic_tcheh", 0x1000686, Some('\u{686}')),
    ("Arabic_ddal", 0x1000688, Some('\u{688}')),
    ("Arabic_rreh", 0x1000691, Some('\u{691}')),
    ("Arabic_comma", 0x05ac, Some('،')),
    ("Arabic_fullstop", 0x10006d4, Some('\u{6d4}')),
    ("Arabic_0", 0x1000660, Some('٠')),
    ("Arabic_1", 0x1000661, Some('١')),
    ("Arabic_2", 0x1000662, Some('٢')),
    ("Arabic_3", 0x1000663, Some('٣')),
    ("Arabic_4", 0x1000664, Some('٤')),
    ("Arabic_5", 0x1000665, Some('٥')),
    ("Arabic_6", 0x1000666, Some('٦')),
    ("Arabic_7", 0x1000667, Some('٧')),
    ("Arabic_8", 0x1000668, Some('٨')),
    ("Arabic_9", 0x1000669, Some('٩')),
    ("Arabic_semicolon", 0x05bb, Some('\u{61b}')),
    ("Arabic_question_mark", 0x05bf, Some('\u{61f}')),
    ("Arabic_hamza", 0x05c1, Some('\u{621}')),
    ("Arabic_maddaonalef", 0x05c2, Some('\u{622}')),
    ("Arabic_hamzaonalef", 0x05c3, Some('\u{623}')),
    ("Arabic_hamzaonwaw", 0x05c4, Some('\u{624}')),
    ("Arabic_hamzaunderalef", 0x05c5, Some('\u{625}')),
    ("Arabic_hamzaonyeh", 0x05c6, Some('\u{626}')),
    ("Arabic_alef", 0x05c7, Some('\u{627}')),
    ("Arabic_beh", 0x05c8, Some('\u{628}')),
    ("Arabic_tehmarbuta", 0x05c9, Some('\u{629}')),
    ("Arabic_teh", 0x05ca, Some('\u{62a}')),
    ("Arabic_theh", 0x05cb, Some('\u{62b}')),
    ("Arabic_jeem", 0x05cc, Some('\u{62c}')),
    ("Arabic_hah", 0x05cd, Some('\u{62d}')),
    ("Arabic_khah", 0x05ce, Some('\u{62e}')),
    ("Arabic_dal", 0x05cf, Some('\u{62f}')),
    ("Arabic_thal", 0x05d0, Some('\u{630}')),
    ("Arabic_ra", 0x05d1, Some('\u{631}')),
    ("Arabic_zain", 0x05d2, Some('\u{632}')),
    ("Arabic_seen", 0x05d3, Some('\u{633}')),
    ("Arabic_sheen", 0x05d4, Some('\u{634}')),
    ("Arabic_sad", 0x05d5, Some('\u{635}')),
    ("Arabic_dad", 0x05d6, Some('\u{636}')),
    ("Arabic_tah", 0x05d7, Some('\u{637}')),
    ("Arabic_zah", 0x05d8, Some('\u{638}')),
    ("Arabic_ain", 0x05d9, Some('\u{639}')),
    ("Arabic_ghain", 0x05da, Some('\u{63a}')),
    ("Arabic_tatweel", 0x05e0, Some('\u{640}')),
    ("Arabic_feh", 0x05e1, Some('\u{641}')),
    ("Arabic_qaf", 0x05e2, Some('\u{642}')),
    ("Arabic_kaf", 0x05e3, Some('\u{643}')),
    ("Arabic_lam", 0x05e4, Some('\u{644}')),
    ("Arabic_meem", 0x05e5, Some('\u{645}')),
    ("Arabic_noon", 0x05e6, Some('\u{646}')),
    ("Arabic_ha", 0x05e7, Some('\u{647}')),
    ("Arabic_heh", 0x05e7, None),
    ("Arabic_waw", 0x05e8, Some('\u{648}')),
    ("Arabic_alefmaksura", 0x05e9, Some('\u{649}')),
    ("Arabic_yeh", 0x05ea, Some('\u{64a}')),
    ("Arabic_fathatan", 0x05eb, Some('\u{64b}')),
    ("Arabic_dammatan", 0x05ec, Some('\u{64c}')),
    ("Arabic_kasratan", 0x05ed, Some('\u{64d}')),
    ("Arabic_fatha", 0x05ee, Some('\u{64e}')),
    ("Arabic_damma", 0x05ef, Some('\u{64f}')),
    ("Arabic_kasra", 0x05f0, Some('\u{650}')),
    ("Arabic_shadda", 0x05f1, Some('\u{651}')),
    ("Arabic_sukun", 0x05f2, Some('\u{652}')),
    ("Arabic_madda_above", 0x1000653, Some('\u{653}')),
    ("Arabic_hamza_above", 0x1000654, Some('\u{654}')),
    ("Arabic_hamza_below", 0x1000655, Some('\u{655}')),
    ("Arabic_jeh", 0x1000698, Some('\u{698}')),
    ("Arabic_veh", 0x10006a4, Some('\u{6a4}')),
    ("Arabic_keheh", 0x10006a9, Some('\u{6a9}')),
    ("Arabic_gaf", 0x10006af, Some('\u{6af}')),
    ("Arabic_noon_ghunna", 0x10006ba, Some('\u{6ba}')),
    ("Arabic_heh_doachashmee", 0x10006be, Some('\u{6be}')),
    ("Farsi_yeh", 0x10006cc, Some('\u{6cc}')),
    ("Arabic_farsi_yeh", 0x10006cc, Some('\u{6cc}')),
    ("Arabic_yeh_baree", 0x10006d2, Some('\u{6d2}')),
    ("Arabic_heh_goal", 0x10006c1, Some('\u{6c1}')),
    ("Arabic_switch", 0xff7e, None),
    // Cyrillic
    ("Cyrillic_GHE_bar", 0x1000492, Some('Ғ')),
    ("Cyrillic_ghe_bar", 0x1000493, Some('ғ')),
    ("Cyrillic_ZHE_descender", 0x1000496, Some('Җ')),
    ("Cyrillic_zhe_descender", 0x1000497, Some('җ')),
    ("Cyrillic_KA_descender", 0x100049a, Some('Қ')),
    ("Cyrillic_ka_descender", 0x100049b, Some('қ')),
    ("Cyrillic_KA_vertstroke", 0x100049c, Some('Ҝ')),
    ("Cyrillic_ka_vertstroke", 0x100049d, Some('ҝ')),
    ("Cyrillic_EN_descender", 0x10004a2, Some('Ң')),
    ("Cyrillic_en_descender", 0x10004a3, Some('ң')),
    ("Cyrillic_U_straight", 0x10004ae, Some('Ү')),
    ("Cyrillic_u_straight", 0x10004af, Some('ү')),
    ("Cyrillic_U_straight_bar", 0x10004b0, Some('Ұ')),
    ("Cyrillic_u_straight_bar", 0x10004b1, Some('ұ')),
    ("Cyrillic_HA_descender", 0x10004b2, Some('Ҳ')),
    ("Cyrillic_ha_descender", 0x10004b3, Some('ҳ')),
    ("Cyrillic_CHE_descender", 0x10004b6, Some('Ҷ')),
    ("Cyrillic_che_descender", 0x10004b7, Some('ҷ')),
    ("Cyrillic_CHE_vertstroke", 0x10004b8, Some('Ҹ')),
    ("Cyrillic_che_vertstroke", 0x10004b9, Some('ҹ')),
    ("Cyrillic_SHHA", 0x10004ba, Some('Һ')),
    ("Cyrillic_shha", 0x10004bb, Some('һ')),
    ("Cyrillic_SCHWA", 0x10004d8, Some('Ә')),
    ("Cyrillic_schwa", 0x10004d9, Some('ә')),
    ("Cyrillic_I_macron", 0x10004e2, Some('Ӣ')),
    ("Cyrillic_i_macron", 0x10004e3, Some('ӣ')),
    ("Cyrillic_O_bar", 0x10004e8, Some('Ө')),
    ("Cyrillic_o_bar", 0x10004e9, Some('ө')),
    ("Cyrillic_U_macron", 0x10004ee, Some('Ӯ')),
    ("Cyrillic_u_macron", 0x10004ef, Some('ӯ')),
    ("Serbian_dje", 0x06a1, Some('ђ')),
    ("Macedonia_gje", 0x06a2, Some('ѓ')),
    ("Cyrillic_io", 0x06a3, Some('ё')),
    ("Ukrainian_ie", 0x06a4, Some('є')),
    ("Ukranian_je", 0x06a4, None),
    ("Macedonia_dse", 0x06a5, Some('ѕ')),
    ("Ukrainian_i", 0x06a6, Some('і')),
    ("Ukranian_i", 0x06a6, None),
    ("Ukrainian_yi", 0x06a7, Some('ї')),
    ("Ukranian_yi", 0x06a7, None),
    ("Cyrillic_je", 0x06a8, Some('ј')),
    ("Serbian_je", 0x06a8, None),
    ("Cyrillic_lje", 0x06a9, Some('љ')),
    ("Serbian_lje", 0x06a9, None),
    ("Cyrillic_nje", 0x06aa, Some('њ')),
    ("Serbian_nje", 0x06aa, None),
    ("Serbian_tshe", 0x06ab, Some('ћ')),
    ("Macedonia_kje", 0x06ac, Some('ќ')),
    ("Ukrainian_ghe_with_upturn", 0x06ad, Some('ґ')),
    ("Byelorussian_shortu", 0x06ae, Some('ў')),
    ("Cyrillic_dzhe", 0x06af, Some('џ')),
    ("Serbian_dze", 0x06af, None),
    ("numerosign", 0x06b0, Some('№')),
    ("Serbian_DJE", 0x06b1, Some('Ђ')),
    ("Macedonia_GJE", 0x06b2, Some('Ѓ')),
    ("Cyrillic_IO", 0x06b3, Some('Ё')),
    ("Ukrainian_IE", 0x06b4, Some('Є')),
    ("Ukranian_JE", 0x06b4, None),
    ("Macedonia_DSE", 0x06b5, Some('Ѕ')),
    ("Ukrainian_I", 0x06b6, Some('І')),
    ("Ukranian_I", 0x06b6, None),
    ("Ukrainian_YI", 0x06b7, Some('Ї')),
    ("Ukranian_YI", 0x06b7, None),
    ("Cyrillic_JE", 0x06b8, Some('Ј')),
    ("Serbian_JE", 0x06b8, None),
    ("Cyrillic_LJE", 0x06b9, Some('Љ')),
    ("Serbian_LJE", 0x06b9, None),
    ("Cyrillic_NJE", 0x06ba, Some('Њ')),
    ("Serbian_NJE", 0x06ba, None),
    ("Serbian_TSHE", 0x06bb, Some('Ћ')),
    ("Macedonia_KJE", 0x06bc, Some('Ќ')),
    ("Ukrainian_GHE_WITH_UPTURN", 0x06bd, Some('Ґ')),
    ("Byelorussian_SHORTU", 0x06be, Some('Ў')),
    ("Cyrillic_DZHE", 0x06bf, Some('Џ')),
    ("Serbian_DZE", 0x06bf, None),
    ("Cyrillic_yu", 0x06c0, Some('ю')),
    ("Cyrillic_a", 0x06c1, Some('а')),
    ("Cyrillic_be", 0x06c2, Some('б')),
    ("Cyrillic_tse", 0x06c3, Some('ц')),
    ("Cyrillic_de", 0x06c4, Some('д')),
    ("Cyrillic_ie", 0x06c5, Some('е')),
    ("Cyrillic_ef", 0x06c6, Some('ф')),
    ("Cyrillic_ghe", 0x06c7, Some('г')),
    ("Cyrillic_ha", 0x06c8, Some('х')),
    ("Cyrillic_i", 0x06c9, Some('и')),
    ("Cyrillic_shorti", 0x06ca, Some('й')),
    ("Cyrillic_ka", 0x06cb, Some('к')),
    ("Cyrillic_el", 0x06cc, Some('л')),
    ("Cyrillic_em", 0x06cd, Some('м')),
    ("Cyrillic_en", 0x06ce, Some('н')),
    ("Cyrillic_o", 0x06cf, Some('о')),
    ("Cyrillic_pe", 0x06d0, Some('п')),
    ("Cyrillic_ya", 0x06d1, Some('я')),
    ("Cyrillic_er", 0x06d2, Some('р')),
    ("Cyrillic_es", 0x06d3, Some('с')),
    ("Cyrillic_te", 0x06d4, Some('т')),
    ("Cyrillic_u", 0x06d5, Some('у')),
    ("Cyrillic_zhe", 0x06d6, Some('ж')),
    ("Cyrillic_ve", 0x06d7, Some('в')),
    ("Cyrillic_softsign", 0x06d8, Some('ь')),
    ("Cyrillic_yeru", 0x06d9, Some('ы')),
    ("Cyrillic_ze", 0x06da, Some('з')),
    ("Cyrillic_sha", 0x06db, Some('ш')),
    ("Cyrillic_e", 0x06dc, Some('э')),
    ("Cyrillic_shcha", 0x06dd, Some('щ')),
    ("Cyrillic_che", 0x06de, Some('ч')),
    ("Cyrillic_hardsign", 0x06df, Some('ъ')),
    ("Cyrillic_YU", 0x06e0, Some('Ю')),
    ("Cyrillic_A", 0x06e1, Some('А')),
    ("Cyrillic_BE", 0x06e2, Some('Б')),
    ("Cyrillic_TSE", 0x06e3, Some('Ц')),
    ("Cyrillic_DE", 0x06e4, Some('Д')),
    ("Cyrillic_IE", 0x06e5, Some('Е')),
    ("Cyrillic_EF", 0x06e6, Some('Ф')),
    ("Cyrillic_GHE", 0x06e7, Some('Г')),
    ("Cyrillic_HA", 0x06e8, Some('Х')),
    ("Cyrillic_I", 0x06e9, Some('И')),
    ("Cyrillic_SHORTI", 0x06ea, Some('Й')),
    ("Cyrillic_KA", 0x06eb, Some('К')),
    ("Cyrillic_EL", 0x06ec, Some('Л')),
    ("Cyrillic_EM", 0x06ed, Some('М')),
    ("Cyrillic_EN", 0x06ee, Some('Н')),
    ("Cyrillic_O", 0x06ef, Some('О')),
    ("Cyrillic_PE", 0x06f0, Some('П')),
    ("Cyrillic_YA", 0x06f1, Some('Я')),
    ("Cyrillic_ER", 0x06f2, Some('Р')),
    ("Cyrillic_ES", 0x06f3, Some('С')),
    ("Cyrillic_TE", 0x06f4, Some('Т')),
    ("Cyrillic_U", 0x06f5, Some('У')),
    ("Cyrillic_ZHE", 0x06f6, Some('Ж')),
    ("Cyrillic_VE", 0x06f7, Some('В')),
    ("Cyrillic_SOFTSIGN", 0x06f8, Some('Ь')),
    ("Cyrillic_YERU", 0x06f9, Some('Ы')),
    ("Cyrillic_ZE", 0x06fa, Some('З')),
    ("Cyrillic_SHA", 0x06fb, Some('Ш')),
    ("Cyrillic_E", 0x06fc, Some('Э')),
    ("Cyrillic_SHCHA", 0x06fd, Some('Щ')),
    ("Cyrillic_CHE", 0x06fe, Some('Ч')),
    ("Cyrillic_HARDSIGN", 0x06ff, Some('Ъ')),
    // Greek
    ("Greek_ALPHAaccent", 0x07a1, Some('Ά')),
    ("Greek_EPSILONaccent", 0x07a2, Some('Έ')),
    ("Greek_ETAaccent", 0x07a3, Some('Ή')),
    ("Greek_IOTAaccent", 0x07a4, Some('Ί')),
    ("Greek_IOTAdieresis", 0x07a5, Some('Ϊ')),
    ("Greek_IOTAdiaeresis", 0x07a5, None),
    ("Greek_OMICRONaccent", 0x07a7, Some('Ό')),
    ("Greek_UPSILONaccent", 0x07a8, Some('Ύ')),
    ("Greek_UPSILONdieresis", 0x07a9, Some('Ϋ')),
    ("Greek_OMEGAaccent", 0x07ab, Some('Ώ')),
    ("Greek_accentdieresis", 0x07ae, Some('΅')),
    ("Greek_horizbar", 0x07af, Some('―')),
    ("Greek_alphaaccent", 0x07b1, Some('ά')),
    ("Greek_epsilonaccent", 0x07b2, Some('έ')),
    ("Greek_etaaccent", 0x07b3, Some('ή')),
    ("Greek_iotaaccent", 0x07b4, Some('ί')),
    ("Greek_iotadieresis", 0x07b5, Some('ϊ')),
    ("Greek_iotaaccentdieresis", 0x07b6, Some('ΐ')),
    ("Greek_omicronaccent", 0x07b7, Some('ό')),
    ("Greek_upsilonaccent", 0x07b8, Some('ύ')),
    ("Greek_upsilondieresis", 0x07b9, Some('ϋ')),
    ("Greek_upsilonaccentdieresis", 0x07ba, Some('ΰ')),
    ("Greek_omegaaccent", 0x07bb, Some('ώ')),
    ("Greek_ALPHA", 0x07c1, Some('Α')),
    ("Greek_BETA", 0x07c2, Some('Β')),
    ("Greek_GAMMA", 0x07c3, Some('Γ')),
    ("Greek_DELTA", 0x07c4, Some('Δ')),
    ("Greek_EPSILON", 0x07c5, Some('Ε')),
    ("Greek_ZETA", 0x07c6, Some('Ζ')),
    ("Greek_ETA", 0x07c7, Some('Η')),
    ("Greek_THETA", 0x07c8, Some('Θ')),
    ("Greek_IOTA", 0x07c9, Some('Ι')),
    ("Greek_KAPPA", 0x07ca, Some('Κ')),
    ("Greek_LAMDA", 0x07cb, Some('Λ')),
    ("Greek_LAMBDA", 0x07cb, Some('Λ')),
    ("Greek_MU", 0x07cc, Some('Μ')),
    ("Greek_NU", 0x07cd, Some('Ν')),
    ("Greek_XI", 0x07ce, Some('Ξ')),
    ("Greek_OMICRON", 0x07cf, Some('Ο')),
    ("Greek_PI", 0x07d0, Some('Π')),
    ("Greek_RHO", 0x07d1, Some('Ρ')),
    ("Greek_SIGMA", 0x07d2, Some('Σ')),
    ("Greek_TAU", 0x07d4, Some('Τ')),
    ("Greek_UPSILON", 0x07d5, Some('Υ')),
    ("Greek_PHI", 0x07d6, Some('Φ')),
    ("Greek_CHI", 0x07d7, Some('Χ')),
    ("Greek_PSI", 0x07d8, Some('Ψ')),
    ("Greek_OMEGA", 0x07d9, Some('Ω')),
    ("Greek_alpha", 0x07e1, Some('α')),
    ("Greek_beta", 0x07e2, Some('β')),
    ("Greek_gamma", 0x07e3, Some('γ')),
    ("Greek_delta", 0x07e4, Some('δ')),
    ("Greek_epsilon", 0x07e5, Some('ε')),
    ("Greek_zeta", 0x07e6, Some('ζ')),
    ("Greek_eta", 0x07e7, Some('η')),
    ("Greek_theta", 0x07e8, Some('θ')),
    ("Greek_iota", 0x07e9, Some('ι')),
    ("Greek_kappa", 0x07ea, Some('κ')),
    ("Greek_lamda", 0x07eb, Some('λ')),
    ("Greek_lambda", 0x07eb, Some('λ')),
    ("Greek_mu", 0x07ec, Some('μ')),
    ("Greek_nu", 0x07ed, Some('ν')),
    ("Greek_xi", 0x07ee, Some('ξ')),
    ("Greek_omicron", 0x07ef, Some('ο')),
    ("Greek_pi", 0x07f0, Some('π')),
    ("Greek_rho", 0x07f1, Some('ρ')),
    ("Greek_sigma", 0x07f2, Some('σ')),
    ("Greek_finalsmallsigma", 0x07f3, Some('ς')),
    ("Greek_tau", 0x07f4, Some('τ')),
    ("Greek_upsilon", 0x07f5, Some('υ')),
    ("Greek_phi", 0x07f6, Some('φ')),
    ("Greek_chi", 0x07f7, Some('χ')),
    ("Greek_psi", 0x07f8, Some('ψ')),
    ("Greek_omega", 0x07f9, Some('ω')),
    ("Greek_switch", 0xff7e, None),
    // Technical
    ("leftradical", 0x08a1, Some('⎷')),
    ("topleftradical", 0x08a2, None),
    ("horizconnector", 0x08a3, None),
    ("topintegral", 0x08a4, Some('⌠')),
    ("botintegral", 0x08a5, Some('⌡')),
    ("vertconnector", 0x08a6, None),
    ("topleftsqbracket", 0x08a7, Some('⎡')),
    ("botleftsqbracket", 0x08a8, Some('⎣')),
    ("toprightsqbracket", 0x08a9, Some('⎤')),
    ("botrightsqbracket", 0x08aa, Some('⎦')),
    ("topleftparens", 0x08ab, Some('⎛')),
    ("botleftparens", 0x08ac, Some('⎝')),
    ("toprightparens", 0x08ad, Some('⎞')),
    ("botrightparens", 0x08ae, Some('⎠')),
    ("leftmiddlecurlybrace", 0x08af, Some('⎨')),
    ("rightmiddlecurlybrace", 0x08b0, Some('⎬')),
    ("topleftsummation", 0x08b1, None),
    ("botleftsummation", 0x08b2, None),
    ("topvertsummationconnector", 0x08b3, None),
    ("botvertsummationconnector", 0x08b4, None),
    ("toprightsummation", 0x08b5, None),
    ("botrightsummation", 0x08b6, None),
    ("rightmiddlesummation", 0x08b7, None),
    ("lessthanequal", 0x08bc, Some('≤')),
    ("notequal", 0x08bd, Some('≠')),
    ("greaterthanequal", 0x08be, Some('≥')),
    ("integral", 0x08bf, Some('∫')),
    ("therefore", 0x08c0, Some('∴')),
    ("variation", 0x08c1, Some('∝')),
    ("infinity", 0x08c2, Some('∞')),
    ("nabla", 0x08c5, Some('∇')),
    ("approximate", 0x08c8, Some('∼')),
    ("similarequal", 0x08c9, Some('≃')),
    ("ifonlyif", 0x08cd, Some('⇔')),
    ("implies", 0x08ce, Some('⇒')),
    ("identical", 0x08cf, Some('≡')),
    ("radical", 0x08d6, Some('√')),
    ("includedin", 0x08da, Some('⊂')),
    ("includes", 0x08db, Some('⊃')),
    ("intersection", 0x08dc, Some('∩')),
    ("union", 0x08dd, Some('∪')),
    ("logicaland", 0x08de, Some('∧')),
    ("logicalor", 0x08df, Some('∨')),
    ("partialderivative", 0x08ef, Some('∂')),
    ("function", 0x08f6, Some('ƒ')),
    ("leftarrow", 0x08fb, Some('←')),
    ("uparrow", 0x08fc, Some('↑')),
    ("rightarrow", 0x08fd, Some('→')),
    ("downarrow", 0x08fe, Some('↓')),
    // Special
    ("blank", 0x09df, None),
    ("soliddiamond", 0x09e0, Some('◆')),
    ("checkerboard", 0x09e1, Some('▒')),
    ("ht", 0x09e2, Some('␉')),
    ("ff", 0x09e3, Some('␌')),
    ("cr", 0x09e4, Some('␍')),
    ("lf", 0x09e5, Some('␊')),
    ("nl", 0x09e8, Some('␤')),
    ("vt", 0x09e9, Some('␋')),
    ("lowrightcorner", 0x09ea, Some('┘')),
    ("uprightcorner", 0x09eb, Some('┐')),
    ("upleftcorner", 0x09ec, Some('┌')),
    ("lowleftcorner", 0x09ed, Some('└')),
    ("crossinglines", 0x09ee, Some('┼')),
    ("horizlinescan1", 0x09ef, Some('⎺')),
    ("horizlinescan3", 0x09f0, Some('⎻')),
    ("horizlinescan5", 0x09f1, Some('─')),
    ("horizlinescan7", 0x09f2, Some('⎼')),
    ("horizlinescan9", 0x09f3, Some('⎽')),
    ("leftt", 0x09f4, Some('├')),
    ("rightt", 0x09f5, Some('┤')),
    ("bott", 0x09f6, Some('┴')),
    ("topt", 0x09f7, Some('┬')),
    ("vertbar", 0x09f8, Some('│')),
    // Publishing
    ("emspace", 0x0aa1, Some('\u{2003}')),
    ("enspace", 0x0aa2, Some('\u{2002}')),
    ("em3space", 0x0aa3, Some('\u{2004}')),
    ("em4space", 0x0aa4, Some('\u{2005}')),
    ("digitspace", 0x0aa5, Some('\u{2007}')),
    ("punctspace", 0x0aa6, Some('\u{2008}')),
    ("thinspace", 0x0aa7, Some('\u{2009}')),
    ("hairspace", 0x0aa8, Some('\u{200a}')),
    ("emdash", 0x0aa9, Some('—')),
    ("endash", 0x0aaa, Some('–')),
    ("signifblank", 0x0aac, None),
    ("ellipsis", 0x0aae, Some('…')),
    ("doubbaselinedot", 0x0aaf, Some('‥')),
    ("onethird", 0x0ab0, Some('⅓')),
    ("twothirds", 0x0ab1, Some('⅔')),
    ("onefifth", 0x0ab2, Some('⅕')),
    ("twofifths", 0x0ab3, Some('⅖')),
    ("threefifths", 0x0ab4, Some('⅗')),
    ("fourfifths", 0x0ab5, Some('⅘')),
    ("onesixth", 0x0ab6, Some('⅙')),
    ("fivesixths", 0x0ab7, Some('⅚')),
    ("careof", 0x0ab8, Some('℅')),
    ("figdash", 0x0abb, Some('‒')),
    ("leftanglebracket", 0x0abc, None),
    ("decimalpoint", 0x0abd, None),
    ("rightanglebracket", 0x0abe, None),
    ("marker", 0x0abf, None),
    ("oneeighth", 0x0ac3, Some('⅛')),
    ("threeeighths", 0x0ac4, Some('⅜')),
    ("fiveeighths", 0x0ac5, Some('⅝')),
    ("seveneighths", 0x0ac6, Some('⅞')),
    ("trademark", 0x0ac9, Some('™')),
    ("signaturemark", 0x0aca, None),
    ("trademarkincircle", 0x0acb, None),
    ("leftopentriangle", 0x0acc, None),
    ("rightopentriangle", 0x0acd, None),
    ("emopencircle", 0x0ace, None),
    ("emopenrectangle", 0x0acf, None),
    ("leftsinglequotemark", 0x0ad0, Some('‘')),
    ("rightsinglequotemark", 0x0ad1, Some('’')),
    ("leftdoublequotemark", 0x0ad2, Some('“')),
    ("rightdoublequotemark", 0x0ad3, Some('”')),
    ("prescription", 0x0ad4, Some('℞')),
    ("permille", 0x0ad5, Some('‰')),
    ("minutes", 0x0ad6, Some('′')),
    ("seconds", 0x0ad7, Some('″')),
    ("latincross", 0x0ad9, Some('✝')),
    ("hexagram", 0x0ada, None),
    ("filledrectbullet", 0x0adb, None),
    ("filledlefttribullet", 0x0adc, None),
    ("filledrighttribullet", 0x0add, None),
    ("emfilledcircle", 0x0ade, None),
    ("emfilledrect", 0x0adf, None),
    ("enopencircbullet", 0x0ae0, None),
    ("enopensquarebullet", 0x0ae1, None),
    ("openrectbullet", 0x0ae2, None),
    ("opentribulletup", 0x0ae3, None),
    ("opentribulletdown", 0x0ae4, None),
    ("openstar", 0x0ae5, None),
    ("enfilledcircbullet", 0x0ae6, None),
    ("enfilledsqbullet", 0x0ae7, None),
    ("filledtribulletup", 0x0ae8, None),
    ("filledtribulletdown", 0x0ae9, None),
    ("leftpointer", 0x0aea, None),
    ("rightpointer", 0x0aeb, None),
    ("club", 0x0aec, Some('♣')),
    ("diamond", 0x0aed, Some('♦')),
    ("heart", 0x0aee, Some('♥')),
    ("maltesecross", 0x0af0, Some('✠')),
    ("dagger", 0x0af1, Some('†')),
    ("doubledagger", 0x0af2, Some('‡')),
    ("checkmark", 0x0af3, Some('✓')),
    ("ballotcross", 0x0af4, Some('✗')),
    ("musicalsharp", 0x0af5, Some('♯')),
    ("musicalflat", 0x0af6, Some('♭')),
    ("malesymbol", 0x0af7, Some('♂')),
    ("femalesymbol", 0x0af8, Some('♀')),
    ("telephone", 0x0af9, Some('☎')),
    ("telephonerecorder", 0x0afa, Some('⌕')),
    ("phonographcopyright", 0x0afb, Some('℗')),
    ("caret", 0x0afc, Some('‸')),
    ("singlelowquotemark", 0x0afd, Some('‚')),
    ("doublelowquotemark", 0x0afe, Some('„')),
    ("cursor", 0x0aff, None),
    // APL
    ("leftcaret", 0x0ba3, None),
    ("rightcaret", 0x0ba6, None),
    ("downcaret", 0x0ba8, None),
    ("upcaret", 0x0ba9, None),
    ("overbar", 0x0bc0, None),
    ("downtack", 0x0bc2, Some('⊤')),
    ("upshoe", 0x0bc3, None),
    ("downstile", 0x0bc4, Some('⌊')),
    ("underbar", 0x0bc6, None),
    ("jot", 0x0bca, Some('∘')),
    ("quad", 0x0bcc, Some('⎕')),
    ("uptack", 0x0bce, Some('⊥')),
    ("circle", 0x0bcf, Some('○')),
    ("upstile", 0x0bd3, Some('⌈')),
    ("downshoe", 0x0bd6, None),
    ("rightshoe", 0x0bd8, None),
    ("leftshoe", 0x0bda, None),
    ("lefttack", 0x0bdc, Some('⊣')),
    ("righttack", 0x0bfc, Some('⊢')),
    // Hebrew
    ("hebrew_doublelowline", 0x0cdf, Some('‗')),
    ("hebrew_aleph", 0x0ce0, Some('\u{5d0}')),
    ("hebrew_bet", 0x0ce1, Some('\u{5d1}')),
    ("hebrew_beth", 0x0ce1, None),
    ("hebrew_gimel", 0x0ce2, Some('\u{5d2}')),
    ("hebrew_gimmel", 0x0ce2, None),
    ("hebrew_dalet", 0x0ce3, Some('\u{5d3}')),
    ("hebrew_daleth", 0x0ce3, None),
    ("hebrew_he", 0x0ce4, Some('\u{5d4}')),
    ("hebrew_waw", 0x0ce5, Some('\u{5d5}')),
    ("hebrew_zain", 0x0ce6, Some('\u{5d6}')),
    ("hebrew_zayin", 0x0ce6, None),
    ("hebrew_chet", 0x0ce7, Some('\u{5d7}')),
    ("hebrew_het", 0x0ce7, None),
    ("hebrew_tet", 0x0ce8, Some('\u{5d8}')),
    ("hebrew_teth", 0x0ce8, None),
    ("hebrew_yod", 0x0ce9, Some('\u{5d9}')),
    ("hebrew_finalkaph", 0x0cea, Some('\u{5da}')),
    ("hebrew_kaph", 0x0ceb, Some('\u{5db}')),
    ("hebrew_lamed", 0x0cec, Some('\u{5dc}')),
    ("hebrew_finalmem", 0x0ced, Some('\u{5dd}')),
    ("hebrew_mem", 0x0cee, Some('\u{5de}')),
    ("hebrew_finalnun", 0x0cef, Some('\u{5df}')),
    ("hebrew_nun", 0x0cf0, Some('\u{5e0}')),
    ("hebrew_samech", 0x0cf1, Some('\u{5e1}')),
    ("hebrew_samekh", 0x0cf1, None),
    ("hebrew_ayin", 0x0cf2, Some('\u{5e2}')),
    ("hebrew_finalpe", 0x0cf3, Some('\u{5e3}')),
    ("hebrew_pe", 0x0cf4, Some('\u{5e4}')),
    ("hebrew_finalzade", 0x0cf5, Some('\u{5e5}')),
    ("hebrew_finalzadi", 0x0cf5, None),
    ("hebrew_zade", 0x0cf6, Some('\u{5e6}')),
    ("hebrew_zadi", 0x0cf6, None),
    ("hebrew_qoph", 0x0cf7, Some('\u{5e7}')),
    ("hebrew_kuf", 0x0cf7, None),
    ("hebrew_resh", 0x0cf8, Some('\u{5e8}')),
    ("hebrew_shin", 0x0cf9, Some('\u{5e9}')),
    ("hebrew_taw", 0x0cfa, Some('\u{5ea}')),
    ("hebrew_taf", 0x0cfa, None),
    ("Hebrew_switch", 0xff7e, None),
    // Thai
    ("Thai_kokai", 0x0da1, Some('ก')),
    ("Thai_khokhai", 0x0da2, Some('ข')),
    ("Thai_khokhuat", 0x0da3, Some('ฃ')),
    ("Thai_khokhwai", 0x0da4, Some('ค')),
    ("Thai_khokhon", 0x0da5, Some('ฅ')),
    ("Thai_khorakhang", 0x0da6, Some('ฆ')),
    ("Thai_ngongu", 0x0da7, Some('ง')),
    ("Thai_chochan", 0x0da8, Some('จ')),
    ("Thai_choching", 0x0da9, Some('ฉ')),
    ("Thai_chochang", 0x0daa, Some('ช')),
    ("Thai_soso", 0x0dab, Some('ซ')),
    ("Thai_chochoe", 0x0dac, Some('ฌ')),
    ("Thai_yoying", 0x0dad, Some('ญ')),
    ("Thai_dochada", 0x0dae, Some('ฎ')),
    ("Thai_topatak", 0x0daf, Some('ฏ')),
    ("Thai_thothan", 0x0db0, Some('ฐ')),
    ("Thai_thonangmontho", 0x0db1, Some('ฑ')),
    ("Thai_thophuthao", 0x0db2, Some('ฒ')),
    ("Thai_nonen", 0x0db3, Some('ณ')),
    ("Thai_dodek", 0x0db4, Some('ด')),
    ("Thai_totao", 0x0db5, Some('ต')),
    ("Thai_thothung", 0x0db6, Some('ถ')),
    ("Thai_thothahan", 0x0db7, Some('ท')),
    ("Thai_thothong", 0x0db8, Some('ธ')),
    ("Thai_nonu", 0x0db9, Some('น')),
    ("Thai_bobaimai", 0x0dba, Some('บ')),
    ("Thai_popla", 0x0dbb, Some('ป')),
    ("Thai_phophung", 0x0dbc, Some('ผ')),
    ("Thai_fofa", 0x0dbd, Some('ฝ')),
    ("Thai_phophan", 0x0dbe, Some('พ')),
    ("Thai_fofan", 0x0dbf, Some('ฟ')),
    ("Thai_phosamphao", 0x0dc0, Some('ภ')),
    ("Thai_moma", 0x0dc1, Some('ม')),
    ("Thai_yoyak", 0x0dc2, Some('ย')),
    ("Thai_rorua", 0x0dc3, Some('ร')),
    ("Thai_ru", 0x0dc4, Some('ฤ')),
    ("Thai_loling", 0x0dc5, Some('ล')),
    ("Thai_lu", 0x0dc6, Some('ฦ')),
    ("Thai_wowaen", 0x0dc7, Some('ว')),
    ("Thai_sosala", 0x0dc8, Some('ศ')),
    ("Thai_sorusi", 0x0dc9, Some('ษ')),
    ("Thai_sosua", 0x0dca, Some('ส')),
    ("Thai_hohip", 0x0dcb, Some('ห')),
    ("Thai_lochula", 0x0dcc, Some('ฬ')),
    ("Thai_oang", 0x0dcd, Some('อ')),
    ("Thai_honokhuk", 0x0dce, Some('ฮ')),
    ("Thai_paiyannoi", 0x0dcf, Some('ฯ')),
    ("Thai_saraa", 0x0dd0, Some('ะ')),
    ("Thai_maihanakat", 0x0dd1, Some('\u{e31}')),
    ("Thai_saraaa", 0x0dd2, Some('า')),
    ("Thai_saraam", 0x0dd3, Some('ำ')),
    ("Thai_sarai", 0x0dd4, Some('\u{e34}')),
    ("Thai_saraii", 0x0dd5, Some('\u{e35}')),
    ("Thai_saraue", 0x0dd6, Some('\u{e36}')),
    ("Thai_sarauee", 0x0dd7, Some('\u{e37}')),
    ("Thai_sarau", 0x0dd8, Some('\u{e38}')),
    ("Thai_sarauu", 0x0dd9, Some('\u{e39}')),
    ("Thai_phinthu", 0x0dda, Some('\u{e3a}')),
    ("Thai_maihanakat_maitho", 0x0dde, None),
    ("Thai_baht", 0x0ddf, Some('฿')),
    ("Thai_sarae", 0x0de0, Some('เ')),
    ("Thai_saraae", 0x0de1, Some('แ')),
    ("Thai_sarao", 0x0de2, Some('โ')),
    ("Thai_saraaimaimuan", 0x0de3, Some('ใ')),
    ("Thai_saraaimaimalai", 0x0de4, Some('ไ')),
    ("Thai_lakkhangyao", 0x0de5, Some('ๅ')),
    ("Thai_maiyamok", 0x0de6, Some('ๆ')),
    ("Thai_maitaikhu", 0x0de7, Some('\u{e47}')),
    ("Thai_maiek", 0x0de8, Some('\u{e48}')),
    ("Thai_maitho", 0x0de9, Some('\u{e49}')),
    ("Thai_maitri", 0x0dea, Some('\u{e4a}')),
    ("Thai_maichattawa", 0x0deb, Some('\u{e4b}')),
    ("Thai_thanthakhat", 0x0dec, Some('\u{e4c}')),
    ("Thai_nikhahit", 0x0ded, Some('\u{e4d}')),
    ("Thai_leksun", 0x0df0, Some('๐')),
    ("Thai_leknung", 0x0df1, Some('๑')),
    ("Thai_leksong", 0x0df2, Some('๒')),
    ("Thai_leksam", 0x0df3, Some('๓')),
    ("Thai_leksi", 0x0df4, Some('๔')),
    ("Thai_lekha", 0x0df5, Some('๕')),
    ("Thai_lekhok", 0x0df6, Some('๖')),
    ("Thai_lekchet", 0x0df7, Some('๗')),
    ("Thai_lekpaet", 0x0df8, Some('๘')),
    ("Thai_lekkao", 0x0df9, Some('๙')),
    // Korean
    ("Hangul", 0xff31, None),
    ("Hangul_Start", 0xff32, None),
    ("Hangul_End", 0xff33, None),
    ("Hangul_Hanja", 0xff34, None),
    ("Hangul_Jamo", 0xff35, None),
    ("Hangul_Romaja", 0xff36, None),
    ("Hangul_Codeinput", 0xff37, None),
    ("Hangul_Jeonja", 0xff38, None),
    ("Hangul_Banja", 0xff39, None),
    ("Hangul_PreHanja", 0xff3a, None),
    ("Hangul_PostHanja", 0xff3b, None),
    ("Hangul_SingleCandidate", 0xff3c, None),
    ("Hangul_MultipleCandidate", 0xff3d, None),
    ("Hangul_PreviousCandidate", 0xff3e, None),
    ("Hangul_Special", 0xff3f, None),
    ("Hangul_switch", 0xff7e, None),
    ("Hangul_Kiyeog", 0x0ea1, Some('ㄱ')),
    ("Hangul_SsangKiyeog", 0x0ea2, Some('ㄲ')),
    ("Hangul_KiyeogSios", 0x0ea3, Some('ㄳ')),
    ("Hangul_Nieun", 0x0ea4, Some('ㄴ')),
    ("Hangul_NieunJieuj", 0x0ea5, Some('ㄵ')),
    ("Hangul_NieunHieuh", 0x0ea6, Some('ㄶ')),
    ("Hangul_Dikeud", 0x0ea7, Some('ㄷ')),
    ("Hangul_SsangDikeud", 0x0ea8, Some('ㄸ')),
    ("Hangul_Rieul", 0x0ea9, Some('ㄹ')),
    ("Hangul_RieulKiyeog", 0x0eaa, Some('ㄺ')),
    ("Hangul_RieulMieum", 0x0eab, Some('ㄻ')),
    ("Hangul_RieulPieub", 0x0eac, Some('ㄼ')),
    ("Hangul_RieulSios", 0x0ead, Some('ㄽ')),
    ("Hangul_RieulTieut", 0x0eae, Some('ㄾ')),
    ("Hangul_RieulPhieuf", 0x0eaf, Some('ㄿ')),
    ("Hangul_RieulHieuh", 0x0eb0, Some('ㅀ')),
    ("Hangul_Mieum", 0x0eb1, Some('ㅁ')),
    ("Hangul_Pieub", 0x0eb2, Some('ㅂ')),
    ("Hangul_SsangPieub", 0x0eb3, Some('ㅃ')),
    ("Hangul_PieubSios", 0x0eb4, Some('ㅄ')),
    ("Hangul_Sios", 0x0eb5, Some('ㅅ')),
    ("Hangul_SsangSios", 0x0eb6, Some('ㅆ')),
    ("Hangul_Ieung", 0x0eb7, Some('ㅇ')),
    ("Hangul_Jieuj", 0x0eb8, Some('ㅈ')),
    ("Hangul_SsangJieuj", 0x0eb9, Some('ㅉ')),
    ("Hangul_Cieuc", 0x0eba, Some('ㅊ')),
    ("Hangul_Khieuq", 0x0ebb, Some('ㅋ')),
    ("Hangul_Tieut", 0x0ebc, Some('ㅌ')),
    ("Hangul_Phieuf", 0x0ebd, Some('ㅍ')),
    ("Hangul_Hieuh", 0x0ebe, Some('ㅎ')),
    ("Hangul_A", 0x0ebf, Some('ㅏ')),
    ("Hangul_AE", 0x0ec0, Some('ㅐ')),
    ("Hangul_YA", 0x0ec1, Some('ㅑ')),
    ("Hangul_YAE", 0x0ec2, Some('ㅒ')),
    ("Hangul_EO", 0x0ec3, Some('ㅓ')),
    ("Hangul_E", 0x0ec4, Some('ㅔ')),
    ("Hangul_YEO", 0x0ec5, Some('ㅕ')),
    ("Hangul_YE", 0x0ec6, Some('ㅖ')),
    ("Hangul_O", 0x0ec7, Some('ㅗ')),
    ("Hangul_WA", 0x0ec8, Some('ㅘ')),
    ("Hangul_WAE", 0x0ec9, Some('ㅙ')),
    ("Hangul_OE", 0x0eca, Some('ㅚ')),
    ("Hangul_YO", 0x0ecb, Some('ㅛ')),
    ("Hangul_U", 0x0ecc, Some('ㅜ')),
    ("Hangul_WEO", 0x0ecd, Some('ㅝ')),
    ("Hangul_WE", 0x0ece, Some('ㅞ')),
    ("Hangul_WI", 0x0ecf, Some('ㅟ')),
    ("Hangul_YU", 0x0ed0, Some('ㅠ')),
    ("Hangul_EU", 0x0ed1, Some('ㅡ')),
    ("Hangul_YI", 0x0ed2, Some('ㅢ')),
    ("Hangul_I", 0x0ed3, Some('ㅣ')),
    ("Hangul_J_Kiyeog", 0x0ed4, Some('ᆨ')),
    ("Hangul_J_SsangKiyeog", 0x0ed5, Some('ᆩ')),
    ("Hangul_J_KiyeogSios", 0x0ed6, Some('ᆪ')),
    ("Hangul_J_Nieun", 0x0ed7, Some('ᆫ')),
    ("Hangul_J_NieunJieuj", 0x0ed8, Some('ᆬ')),
    ("Hangul_J_NieunHieuh", 0x0ed9, Some('ᆭ')),
    ("Hangul_J_Dikeud", 0x0eda, Some('ᆮ')),
    ("Hangul_J_Rieul", 0x0edb, Some('ᆯ')),
    ("Hangul_J_RieulKiyeog", 0x0edc, Some('ᆰ')),
    ("Hangul_J_RieulMieum", 0x0edd, Some('ᆱ')),
    ("Hangul_J_RieulPieub", 0x0ede, Some('ᆲ')),
    ("Hangul_J_RieulSios", 0x0edf, Some('ᆳ')),
    ("Hangul_J_RieulTieut", 0x0ee0, Some('ᆴ')),
    ("Hangul_J_RieulPhieuf", 0x0ee1, Some('ᆵ')),
    ("Hangul_J_RieulHieuh", 0x0ee2, Some('ᆶ')),
    ("Hangul_J_Mieum", 0x0ee3, Some('ᆷ')),
    ("Hangul_J_Pieub", 0x0ee4, Some('ᆸ')),
    ("Hangul_J_PieubSios", 0x0ee5, Some('ᆹ')),
    ("Hangul_J_Sios", 0x0ee6, Some('ᆺ')),
    ("Hangul_J_SsangSios", 0x0ee7, Some('ᆻ')),
    ("Hangul_J_Ieung", 0x0ee8, Some('ᆼ')),
    ("Hangul_J_Jieuj", 0x0ee9, Some('ᆽ')),
    ("Hangul_J_Cieuc", 0x0eea, Some('ᆾ')),
    ("Hangul_J_Khieuq", 0x0eeb, Some('ᆿ')),
    ("Hangul_J_Tieut", 0x0eec, Some('ᇀ')),
    ("Hangul_J_Phieuf", 0x0eed, Some('ᇁ')),
    ("Hangul_J_Hieuh", 0x0eee, Some('ᇂ')),
    ("Hangul_RieulYeorinHieuh", 0x0eef, Some('ㅭ')),
    ("Hangul_SunkyeongeumMieum", 0x0ef0, Some('ㅱ')),
    ("Hangul_SunkyeongeumPieub", 0x0ef1, Some('ㅸ')),
    ("Hangul_PanSios", 0x0ef2, Some('ㅿ')),
    ("Hangul_KkogjiDalrinIeung", 0x0ef3, Some('ㆁ')),
    ("Hangul_SunkyeongeumPhieuf", 0x0ef4, Some('ㆄ')),
    ("Hangul_YeorinHieuh", 0x0ef5, Some('ㆆ')),
    ("Hangul_AraeA", 0x0ef6, Some('ㆍ')),
    ("Hangul_AraeAE", 0x0ef7, Some('ㆎ')),
    ("Hangul_J_PanSios", 0x0ef8, Some('ᇫ')),
    ("Hangul_J_KkogjiDalrinIeung", 0x0ef9, Some('ᇰ')),
    ("Hangul_J_YeorinHieuh", 0x0efa, Some('ᇹ')),
    ("Korean_Won", 0x0eff, None),
    // Armenian
    ("Armenian_ligature_ew", 0x1000587, Some('և')),
    ("Armenian_full_stop", 0x1000589, Some('։')),
    ("Armenian_verjaket", 0x1000589, Some('։')),
    ("Armenian_separation_mark", 0x100055d, Some('՝')),
    ("Armenian_but", 0x100055d, Some('՝')),
    ("Armenian_hyphen", 0x100058a, Some('֊')),
    ("Armenian_yentamna", 0x100058a, Some('֊')),
    ("Armenian_exclam", 0x100055c, Some('՜')),
    ("Armenian_amanak", 0x100055c, Some('՜')),
    ("Armenian_accent", 0x100055b, Some('՛')),
    ("Armenian_shesht", 0x100055b, Some('՛')),
    ("Armenian_question", 0x100055e, Some('՞')),
    ("Armenian_paruyk", 0x100055e, Some('՞')),
    ("Armenian_AYB", 0x1000531, Some('Ա')),
    ("Armenian_ayb", 0x1000561, Some('ա')),
    ("Armenian_BEN", 0x1000532, Some('Բ')),
    ("Armenian_ben", 0x1000562, Some('բ')),
    ("Armenian_GIM", 0x1000533, Some('Գ')),
    ("Armenian_gim", 0x1000563, Some('գ')),
    ("Armenian_DA", 0x1000534, Some('Դ')),
    ("Armenian_da", 0x1000564, Some('դ')),
    ("Armenian_YECH", 0x1000535, Some('Ե')),
    ("Armenian_yech", 0x1000565, Some('ե')),
    ("Armenian_ZA", 0x1000536, Some('Զ')),
    ("Armenian_za", 0x1000566, Some('զ')),
    ("Armenian_E", 0x1000537, Some('Է')),
    ("Armenian_e", 0x1000567, Some('է')),
    ("Armenian_AT", 0x1000538, Some('Ը')),
    ("Armenian_at", 0x1000568, Some('ը')),
    ("Armenian_TO", 0x1000539, Some('Թ')),
    ("Armenian_to", 0x1000569, Some('թ')),
    ("Armenian_ZHE", 0x100053a, Some('Ժ')),
    ("Armenian_zhe", 0x100056a, Some('ժ')),
    ("Armenian_INI", 0x100053b, Some('Ի')),
    ("Armenian_ini", 0x100056b, Some('ի')),
    ("Armenian_LYUN", 0x100053c, Some('Լ')),
    ("Armenian_lyun", 0x100056c, Some('լ')),
    ("Armenian_KHE", 0x100053d, Some('Խ')),
    ("Armenian_khe", 0x100056d, Some('խ')),
    ("Armenian_TSA", 0x100053e, Some('Ծ')),
    ("Armenian_tsa", 0x100056e, Some('ծ')),
    ("Armenian_KEN", 0x100053f, Some('Կ')),
    ("Armenian_ken", 0x100056f, Some('կ')),
    ("Armenian_HO", 0x1000540, Some('Հ')),
    ("Armenian_ho", 0x1000570, Some('հ')),
    ("Armenian_DZA", 0x1000541, Some('Ձ')),
    ("Armenian_dza", 0x1000571, Some('ձ')),
    ("Armenian_GHAT", 0x1000542, Some('Ղ')),
    ("Armenian_ghat", 0x1000572, Some('ղ')),
    ("Armenian_TCHE", 0x1000543, Some('Ճ')),
    ("Armenian_tche", 0x1000573, Some('ճ')),
    ("Armenian_MEN", 0x1000544, Some('Մ')),
    ("Armenian_men", 0x1000574, Some('մ')),
    ("Armenian_HI", 0x1000545, Some('Յ')),
    ("Armenian_hi", 0x1000575, Some('յ')),
    ("Armenian_NU", 0x1000546, Some('Ն')),
    ("Armenian_nu", 0x1000576, Some('ն')),
    ("Armenian_SHA", 0x1000547, Some('Շ')),
    ("Armenian_sha", 0x1000577, Some('շ')),
    ("Armenian_VO", 0x1000548, Some('Ո')),
    ("Armenian_vo", 0x1000578, Some('ո')),
    ("Armenian_CHA", 0x1000549, Some('Չ')),
    ("Armenian_cha", 0x1000579, Some('չ')),
    ("Armenian_PE", 0x100054a, Some('Պ')),
    ("Armenian_pe", 0x100057a, Some('պ')),
    ("Armenian_JE", 0x100054b, Some('Ջ')),
    ("Armenian_je", 0x100057b, Some('ջ')),
    ("Armenian_RA", 0x100054c, Some('Ռ')),
    ("Armenian_ra", 0x100057c, Some('ռ')),
    ("Armenian_SE", 0x100054d, Some('Ս')),
    ("Armenian_se", 0x100057d, Some('ս')),
    ("Armenian_VEV", 0x100054e, Some('Վ')),
    ("Armenian_vev", 0x100057e, Some('վ')),
    ("Armenian_TYUN", 0x100054f, Some('Տ')),
    ("Armenian_tyun", 0x100057f, Some('տ')),
    ("Armenian_RE", 0x1000550, Some('Ր')),
    ("Armenian_re", 0x1000580, Some('ր')),
    ("Armenian_TSO", 0x1000551, Some('Ց')),
    ("Armenian_tso", 0x1000581, Some('ց')),
    ("Armenian_VYUN", 0x1000552, Some('Ւ')),
    ("Armenian_vyun", 0x1000582, Some('ւ')),
    ("Armenian_PYUR", 0x1000553, Some('Փ')),
    ("Armenian_pyur", 0x1000583, Some('փ')),
    ("Armenian_KE", 0x1000554, Some('Ք')),
    ("Armenian_ke", 0x1000584, Some('ք')),
    ("Armenian_O", 0x1000555, Some('Օ')),
    ("Armenian_o", 0x1000585, Some('օ')),
    ("Armenian_FE", 0x1000556, Some('Ֆ')),
    ("Armenian_fe", 0x1000586, Some('ֆ')),
    ("Armenian_apostrophe", 0x100055a, Some('՚')),
    // Georgian
    ("Georgian_an", 0x10010d0, Some('ა')),
    ("Georgian_ban", 0x10010d1, Some('ბ')),
    ("Georgian_gan", 0x10010d2, Some('გ')),
    ("Georgian_don", 0x10010d3, Some('დ')),
    ("Georgian_en", 0x10010d4, Some('ე')),
    ("Georgian_vin", 0x10010d5, Some('ვ')),
    ("Georgian_zen", 0x10010d6, Some('ზ')),
    ("Georgian_tan", 0x10010d7, Some('თ')),
    ("Georgian_in", 0x10010d8, Some('ი')),
    ("Georgian_kan", 0x10010d9, Some('კ')),
    ("Georgian_las", 0x10010da, Some('ლ')),
    ("Georgian_man", 0x10010db, Some('მ')),
    ("Georgian_nar", 0x10010dc, Some('ნ')),
    ("Georgian_on", 0x10010dd, Some('ო')),
    ("Georgian_par", 0x10010de, Some('პ')),
    ("Georgian_zhar", 0x10010df, Some('ჟ')),
    ("Georgian_rae", 0x10010e0, Some('რ')),
    ("Georgian_san", 0x10010e1, Some('ს')),
    ("Georgian_tar", 0x10010e2, Some('ტ')),
    ("Georgian_un", 0x10010e3, Some('უ')),
    ("Georgian_phar", 0x10010e4, Some('ფ')),
    ("Georgian_khar", 0x10010e5, Some('ქ')),
    ("Georgian_ghan", 0x10010e6, Some('ღ')),
    ("Georgian_qar", 0x10010e7, Some('ყ')),
    ("Georgian_shin", 0x10010e8, Some('შ')),
    ("Georgian_chin", 0x10010e9, Some('ჩ')),
    ("Georgian_can", 0x10010ea, Some('ც')),
    ("Georgian_jil", 0x10010eb, Some('ძ')),
    ("Georgian_cil", 0x10010ec, Some('წ')),
    ("Georgian_char", 0x10010ed, Some('ჭ')),
    ("Georgian_xan", 0x10010ee, Some('ხ')),
    ("Georgian_jhan", 0x10010ef, Some('ჯ')),
    ("Georgian_hae", 0x10010f0, Some('ჰ')),
    ("Georgian_he", 0x10010f1, Some('ჱ')),
    ("Georgian_hie", 0x10010f2, Some('ჲ')),
    ("Georgian_we", 0x10010f3, Some('ჳ')),
    ("Georgian_har", 0x10010f4, Some('ჴ')),
    ("Georgian_hoe", 0x10010f5, Some('ჵ')),
    ("Georgian_fi", 0x10010f6, Some('ჶ')),
    // Azeri and other Caucasus languages
    ("Xabovedot", 0x1001e8a, Some('Ẋ')),
    ("Ibreve", 0x100012c, Some('Ĭ')),
    ("Zstroke", 0x10001b5, Some('Ƶ')),
    ("Gcaron", 0x10001e6, Some('Ǧ')),
    ("Ocaron", 0x10001d1, Some('Ǒ')),
    ("Obarred", 0x100019f, Some('Ɵ')),
    ("xabovedot", 0x1001e8b, Some('ẋ')),
    ("ibreve", 0x100012d, Some('ĭ')),
    ("zstroke", 0x10001b6, Some('ƶ')),
    ("gcaron", 0x10001e7, Some('ǧ')),
    ("ocaron", 0x10001d2, Some('ǒ')),
    ("obarred", 0x1000275, Some('ɵ')),
    ("SCHWA", 0x100018f, Some('Ə')),
    ("schwa", 0x1000259, Some('ə')),
    ("EZH", 0x10001b7, Some('Ʒ')),
    ("ezh", 0x1000292, Some('ʒ')),
    ("Lbelowdot", 0x1001e36, Some('Ḷ')),
    ("lbelowdot", 0x1001e37, Some('ḷ')),
    // Vietnamese
    ("Abelowdot", 0x1001ea0, Some('Ạ')),
    ("abelowdot", 0x1001ea1, Some('ạ')),
    ("Ahook", 0x1001ea2, Some('Ả')),
    ("ahook", 0x1001ea3, Some('ả')),
    ("Acircumflexacute", 0x1001ea4, Some('Ấ')),
    ("acircumflexacute", 0x1001ea5, Some('ấ')),
    ("Acircumflexgrave", 0x1001ea6, Some('Ầ')),
    ("acircumflexgrave", 0x1001ea7, Some('ầ')),
    ("Acircumflexhook", 0x1001ea8, Some('Ẩ')),
    ("acircumflexhook", 0x1001ea9, Some('ẩ')),
    ("Acircumflextilde", 0x1001eaa, Some('Ẫ')),
    ("acircumflextilde", 0x1001eab, Some('ẫ')),
    ("Acircumflexbelowdot", 0x1001eac, Some('Ậ')),
    ("acircumflexbelowdot", 0x1001ead, Some('ậ')),
    ("Abreveacute", 0x1001eae, Some('Ắ')),
    ("abreveacute", 0x1001eaf, Some('ắ')),
    ("Abrevegrave", 0x1001eb0, Some('Ằ')),
    ("abrevegrave", 0x1001eb1, Some('ằ')),
    ("Abrevehook", 0x1001eb2, Some('Ẳ')),
    ("abrevehook", 0x1001eb3, Some('ẳ')),
    ("Abrevetilde", 0x1001eb4, Some('Ẵ')),
    ("abrevetilde", 0x1001eb5, Some('ẵ')),
    ("Abrevebelowdot", 0x1001eb6, Some('Ặ')),
    ("abrevebelowdot", 0x1001eb7, Some('ặ')),
    ("Ebelowdot", 0x1001eb8, Some('Ẹ')),
    ("ebelowdot", 0x1001eb9, Some('ẹ')),
    ("Ehook", 0x1001eba, Some('Ẻ')),
    ("ehook", 0x1001ebb, Some('ẻ')),
    ("Etilde", 0x1001ebc, Some('Ẽ')),
    ("etilde", 0x1001ebd, Some('ẽ')),
    ("Ecircumflexacute", 0x1001ebe, Some('Ế')),
    ("ecircumflexacute", 0x1001ebf, Some('ế')),
    ("Ecircumflexgrave", 0x1001ec0, Some('Ề')),
    ("ecircumflexgrave", 0x1001ec1, Some('ề')),
    ("Ecircumflexhook", 0x1001ec2, Some('Ể')),
    ("ecircumflexhook", 0x1001ec3, Some('ể')),
    ("Ecircumflextilde", 0x1001ec4, Some('Ễ')),
    ("ecircumflextilde", 0x1001ec5, Some('ễ')),
    ("Ecircumflexbelowdot", 0x1001ec6, Some('Ệ')),
    ("ecircumflexbelowdot", 0x1001ec7, Some('ệ')),
    ("Ihook", 0x1001ec8, Some('Ỉ')),
    ("ihook", 0x1001ec9, Some('ỉ')),
    ("Ibelowdot", 0x1001eca, Some('Ị')),
    ("ibelowdot", 0x1001ecb, Some('ị')),
    ("Obelowdot", 0x1001ecc, Some('Ọ')),
    ("obelowdot", 0x1001ecd, Some('ọ')),
    ("Ohook", 0x1001ece, Some('Ỏ')),
    ("ohook", 0x1001ecf, Some('ỏ')),
    ("Ocircumflexacute", 0x1001ed0, Some('Ố')),
    ("ocircumflexacute", 0x1001ed1, Some('ố')),
    ("Ocircumflexgrave", 0x1001ed2, Some('Ồ')),
    ("ocircumflexgrave", 0x1001ed3, Some('ồ')),
    ("Ocircumflexhook", 0x1001ed4, Some('Ổ')),
    ("ocircumflexhook", 0x1001ed5, Some('ổ')),
    ("Ocircumflextilde", 0x1001ed6, Some('Ỗ')),
    ("ocircumflextilde", 0x1001ed7, Some('ỗ')),
    ("Ocircumflexbelowdot", 0x1001ed8, Some('Ộ')),
    ("ocircumflexbelowdot", 0x1001ed9, Some('ộ')),
    ("Ohornacute", 0x1001eda, Some('Ớ')),
    ("ohornacute", 0x1001edb, Some('ớ')),
    ("Ohorngrave", 0x1001edc, Some('Ờ')),
    ("ohorngrave", 0x1001edd, Some('ờ')),
    ("Ohornhook", 0x1001ede, Some('Ở')),
    ("ohornhook", 0x1001edf, Some('ở')),
    ("Ohorntilde", 0x1001ee0, Some('Ỡ')),
    ("ohorntilde", 0x1001ee1, Some('ỡ')),
    ("Ohornbelowdot", 0x1001ee2, Some('Ợ')),
    ("ohornbelowdot", 0x1001ee3, Some('ợ')),
    ("Ubelowdot", 0x1001ee4, Some('Ụ')),
    ("ubelowdot", 0x1001ee5, Some('ụ')),
    ("Uhook", 0x1001ee6, Some('Ủ')),
    ("uhook", 0x1001ee7, Some('ủ')),
    ("Uhornacute", 0x1001ee8, Some('Ứ')),
    ("uhornacute", 0x1001ee9, Some('ứ')),
    ("Uhorngrave", 0x1001eea, Some('Ừ')),
    ("uhorngrave", 0x1001eeb, Some('ừ')),
    ("Uhornhook", 0x1001eec, Some('Ử')),
    ("uhornhook", 0x1001eed, Some('ử')),
    ("Uhorntilde", 0x1001eee, Some('Ữ')),
    ("uhorntilde", 0x1001eef, Some('ữ')),
    ("Uhornbelowdot", 0x1001ef0, Some('Ự')),
    ("uhornbelowdot", 0x1001ef1, Some('ự')),
    ("Ybelowdot", 0x1001ef4, Some('Ỵ')),
    ("ybelowdot", 0x1001ef5, Some('ỵ')),
    ("Yhook", 0x1001ef6, Some('Ỷ')),
    ("yhook", 0x1001ef7, Some('ỷ')),
    ("Ytilde", 0x1001ef8, Some('Ỹ')),
    ("ytilde", 0x1001ef9, Some('ỹ')),
    ("Ohorn", 0x10001a0, Some('Ơ')),
    ("ohorn", 0x10001a1, Some('ơ')),
    ("Uhorn", 0x10001af, Some('Ư')),
    ("uhorn", 0x10001b0, Some('ư')),
    ("combining_tilde", 0x1000303, Some('\u{303}')),
    ("combining_grave", 0x1000300, Some('\u{300}')),
    ("combining_acute", 0x1000301, Some('\u{301}')),
    ("combining_hook", 0x1000309, Some('\u{309}')),
    ("combining_belowdot", 0x1000323, Some('\u{323}')),
    // Currency
    ("EcuSign", 0x10020a0, Some('₠')),
    ("ColonSign", 0x10020a1, Some('₡')),
    ("CruzeiroSign", 0x10020a2, Some('₢')),
    ("FFrancSign", 0x10020a3, Some('₣')),
    ("LiraSign", 0x10020a4, Some('₤')),
    ("MillSign", 0x10020a5, Some('₥')),
    ("NairaSign", 0x10020a6, Some('₦')),
    ("PesetaSign", 0x10020a7, Some('₧')),
    ("RupeeSign", 0x10020a8, Some('₨')),
    ("WonSign", 0x10020a9, Some('₩')),
    ("NewSheqelSign", 0x10020aa, Some('₪')),
    ("DongSign", 0x10020ab, Some('₫')),
    ("EuroSign", 0x20ac, Some('€')),
    // Mathematical
    ("zerosuperior", 0x1002070, Some('⁰')),
    ("foursuperior", 0x1002074, Some('⁴')),
    ("fivesuperior", 0x1002075, Some('⁵')),
    ("sixsuperior", 0x1002076, Some('⁶')),
    ("sevensuperior", 0x1002077, Some('⁷')),
    ("eightsuperior", 0x1002078, Some('⁸')),
    ("ninesuperior", 0x1002079, Some('⁹')),
    ("zerosubscript", 0x1002080, Some('₀')),
    ("onesubscript", 0x1002081, Some('₁')),
    ("twosubscript", 0x1002082, Some('₂')),
    ("threesubscript", 0x1002083, Some('₃')),
    ("foursubscript", 0x1002084, Some('₄')),
    ("fivesubscript", 0x1002085, Some('₅')),
    ("sixsubscript", 0x1002086, Some('₆')),
    ("sevensubscript", 0x1002087, Some('₇')),
    ("eightsubscript", 0x1002088, Some('₈')),
    ("ninesubscript", 0x1002089, Some('₉')),
    ("partdifferential", 0x1002202, Some('∂')),
    ("emptyset", 0x1002205, Some('∅')),
    ("elementof", 0x1002208, Some('∈')),
    ("notelementof", 0x1002209, Some('∉')),
    ("containsas", 0x100220b, Some('∋')),
    ("squareroot", 0x100221a, Some('√')),
    ("cuberoot", 0x100221b, Some('∛')),
    ("fourthroot", 0x100221c, Some('∜')),
    ("dintegral", 0x100222c, Some('∬')),
    ("tintegral", 0x100222d, Some('∭')),
    ("because", 0x1002235, Some('∵')),
    ("approxeq", 0x1002248, None),
    ("notapproxeq", 0x1002247, None),
    ("notidentical", 0x1002262, Some('≢')),
    ("stricteq", 0x1002263, Some('≣')),
    // Braille
    ("braille_dot_1", 0xfff1, None),
    ("braille_dot_2", 0xfff2, None),
    ("braille_dot_3", 0xfff3, None),
    ("braille_dot_4", 0xfff4, None),
    ("braille_dot_5", 0xfff5, None),
    ("braille_dot_6", 0xfff6, None),
    ("braille_dot_7", 0xfff7, None),
    ("braille_dot_8", 0xfff8, None),
    ("braille_dot_9", 0xfff9, None),
    ("braille_dot_10", 0xfffa, None),
    ("braille_blank", 0x1002800, Some('⠀')),
    ("braille_dots_1", 0x1002801, Some('⠁')),
    ("braille_dots_2", 0x1002802, Some('⠂')),
    ("braille_dots_12", 0x1002803, Some('⠃')),
    ("braille_dots_3", 0x1002804, Some('⠄')),
    ("braille_dots_13", 0x1002805, Some('⠅')),
    ("braille_dots_23", 0x1002806, Some('⠆')),
    ("braille_dots_123", 0x1002807, Some('⠇')),
    ("braille_dots_4", 0x1002808, Some('⠈')),
    ("braille_dots_14", 0x1002809, Some('⠉')),
    ("braille_dots_24", 0x100280a, Some('⠊')),
    ("braille_dots_124", 0x100280b, Some('⠋')),
    ("braille_dots_34", 0x100280c, Some('⠌')),
    ("braille_dots_134", 0x100280d, Some('⠍')),
    ("braille_dots_234", 0x100280e, Some('⠎')),
    ("braille_dots_1234", 0x100280f, Some('⠏')),
    ("braille_dots_5", 0x1002810, Some('⠐')),
    ("braille_dots_15", 0x1002811, Some('⠑')),
    ("braille_dots_25", 0x1002812, Some('⠒')),
    ("braille_dots_125", 0x1002813, Some('⠓')),
    ("braille_dots_35", 0x1002814, Some('⠔')),
    ("braille_dots_135", 0x1002815, Some('⠕')),
    ("braille_dots_235", 0x1002816, Some('⠖')),
    ("braille_dots_1235", 0x1002817, Some('⠗')),
    ("braille_dots_45", 0x1002818, Some('⠘')),
    ("braille_dots_145", 0x1002819, Some('⠙')),
    ("braille_dots_245", 0x100281a, Some('⠚')),
    ("braille_dots_1245", 0x100281b, Some('⠛')),
    ("braille_dots_345", 0x100281c, Some('⠜')),
    ("braille_dots_1345", 0x100281d, Some('⠝')),
    ("braille_dots_2345", 0x100281e, Some('⠞')),
    ("braille_dots_12345", 0x100281f, Some('⠟')),
    ("braille_dots_6", 0x1002820, Some('⠠')),
    ("braille_dots_16", 0x1002821, Some('⠡')),
    ("braille_dots_26", 0x1002822, Some('⠢')),
    ("braille_dots_126", 0x1002823, Some('⠣')),
    ("braille_dots_36", 0x1002824, Some('⠤')),
    ("braille_dots_136", 0x1002825, Some('⠥')),
    ("braille_dots_236", 0x1002826, Some('⠦')),
    ("braille_dots_1236", 0x1002827, Some('⠧')),
    ("braille_dots_46", 0x1002828, Some('⠨')),
    ("braille_dots_146", 0x1002829, Some('⠩')),
    ("braille_dots_246", 0x100282a, Some('⠪')),
    ("braille_dots_1246", 0x100282b, Some('⠫')),
    ("braille_dots_346", 0x100282c, Some('⠬')),
    ("braille_dots_1346", 0x100282d, Some('⠭')),
    ("braille_dots_2346", 0x100282e, Some('⠮')),
    ("braille_dots_12346", 0x100282f, Some('⠯')),
    ("braille_dots_56", 0x1002830, Some('⠰')),
    ("braille_dots_156", 0x1002831, Some('⠱')),
    ("braille_dots_256", 0x1002832, Some('⠲')),
    ("braille_dots_1256", 0x1002833, Some('⠳')),
    ("braille_dots_356", 0x1002834, Some('⠴')),
    ("braille_dots_1356", 0x1002835, Some('⠵')),
    ("braille_dots_2356", 0x1002836, Some('⠶')),
    ("braille_dots_12356", 0x1002837, Some('⠷')),
    ("braille_dots_456", 0x1002838, Some('⠸')),
    ("braille_dots_1456", 0x1002839, Some('⠹')),
    ("braille_dots_2456", 0x100283a, Some('⠺')),
    ("braille_dots_12456", 0x100283b, Some('⠻')),
    ("braille_dots_3456", 0x100283c, Some('⠼')),
    ("braille_dots_13456", 0x100283d, Some('⠽')),
    ("braille_dots_23456", 0x100283e, Some('⠾')),
    ("braille_dots_123456", 0x100283f, Some('⠿')),
    ("braille_dots_7", 0x1002840, Some('⡀')),
    ("braille_dots_17", 0x1002841, Some('⡁')),
    ("braille_dots_27", 0x1002842, Some('⡂')),
    ("braille_dots_127", 0x1002843, Some('⡃')),
    ("braille_dots_37", 0x1002844, Some('⡄')),
    ("braille_dots_137", 0x1002845, Some('⡅')),
    ("braille_dots_237", 0x1002846, Some('⡆')),
    ("braille_dots_1237", 0x1002847, Some('⡇')),
    ("braille_dots_47", 0x1002848, Some('⡈')),
    ("braille_dots_147", 0x1002849, Some('⡉')),
    ("braille_dots_247", 0x100284a, Some('⡊')),
    ("braille_dots_1247", 0x100284b, Some('⡋')),
    ("braille_dots_347", 0x100284c, Some('⡌')),
    ("braille_dots_1347", 0x100284d, Some('⡍')),
    ("braille_dots_2347", 0x100284e, Some('⡎')),
    ("braille_dots_12347", 0x100284f, Some('⡏')),
    ("braille_dots_57", 0x1002850, Some('⡐')),
    ("braille_dots_157", 0x1002851, Some('⡑')),
    ("braille_dots_257", 0x1002852, Some('⡒')),
    ("braille_dots_1257", 0x1002853, Some('⡓')),
    ("braille_dots_357", 0x1002854, Some('⡔')),
    ("braille_dots_1357", 0x1002855, Some('⡕')),
    ("braille_dots_2357", 0x1002856, Some('⡖')),
    ("braille_dots_12357", 0x1002857, Some('⡗')),
    ("braille_dots_457", 0x1002858, Some('⡘')),
    ("braille_dots_1457", 0x1002859, Some('⡙')),
    ("braille_dots_2457", 0x100285a, Some('⡚')),
    ("braille_dots_12457", 0x100285b, Some('⡛')),
    ("braille_dots_3457", 0x100285c, Some('⡜')),
    ("braille_dots_13457", 0x100285d, Some('⡝')),
    ("braille_dots_23457", 0x100285e, Some('⡞')),
    ("braille_dots_123457", 0x100285f, Some('⡟')),
    ("braille_dots_67", 0x1002860, Some('⡠')),
    ("braille_dots_167", 0x1002861, Some('⡡')),
    ("braille_dots_267", 0x1002862, Some('⡢')),
    ("braille_dots_1267", 0x1002863, Some('⡣')),
    ("braille_dots_367", 0x1002864, Some('⡤')),
    ("braille_dots_1367", 0x1002865, Some('⡥')),
    ("braille_dots_2367", 0x1002866, Some('⡦')),
    ("braille_dots_12367", 0x1002867, Some('⡧')),
    ("braille_dots_467", 0x1002868, Some('⡨')),
    ("braille_dots_1467", 0x1002869, Some('⡩')),
    ("braille_dots_2467", 0x100286a, Some('⡪')),
    ("braille_dots_12467", 0x100286b, Some('⡫')),
    ("braille_dots_3467", 0x100286c, Some('⡬')),
    ("braille_dots_13467", 0x100286d, Some('⡭')),
    ("braille_dots_23467", 0x100286e, Some('⡮')),
    ("braille_dots_123467", 0x100286f, Some('⡯')),
    ("braille_dots_567", 0x1002870, Some('⡰')),
    ("braille_dots_1567", 0x1002871, Some('⡱')),
    ("braille_dots_2567", 0x1002872, Some('⡲')),
    ("braille_dots_12567", 0x1002873, Some('⡳')),
    ("braille_dots_3567", 0x1002874, Some('⡴')),
    ("braille_dots_13567", 0x1002875, Some('⡵')),
    ("braille_dots_23567", 0x1002876, Some('⡶')),
    ("braille_dots_123567", 0x1002877, Some('⡷')),
    ("braille_dots_4567", 0x1002878, Some('⡸')),
    ("braille_dots_14567", 0x1002879, Some('⡹')),
    ("braille_dots_24567", 0x100287a, Some('⡺')),
    ("braille_dots_124567", 0x100287b, Some('⡻')),
    ("braille_dots_34567", 0x100287c, Some('⡼')),
    ("braille_dots_134567", 0x100287d, Some('⡽')),
    ("braille_dots_234567", 0x100287e, Some('⡾')),
    ("braille_dots_1234567", 0x100287f, Some('⡿')),
    ("braille_dots_8", 0x1002880, Some('⢀')),
    ("braille_dots_18", 0x1002881, Some('⢁')),
    ("braille_dots_28", 0x1002882, Some('⢂')),
    ("braille_dots_128", 0x1002883, Some('⢃')),
    ("braille_dots_38", 0x1002884, Some('⢄')),
    ("braille_dots_138", 0x1002885, Some('⢅')),
    ("braille_dots_238", 0x1002886, Some('⢆')),
    ("braille_dots_1238", 0x1002887, Some('⢇')),
    ("braille_dots_48", 0x1002888, Some('⢈')),
    ("braille_dots_148", 0x1002889, Some('⢉')),
    ("braille_dots_248", 0x100288a, Some('⢊')),
    ("braille_dots_1248", 0x100288b, Some('⢋')),
    ("braille_dots_348", 0x100288c, Some('⢌')),
    ("braille_dots_1348", 0x100288d, Some('⢍')),
    ("braille_dots_2348", 0x100288e, Some('⢎')),
    ("braille_dots_12348", 0x100288f, Some('⢏')),
    ("braille_dots_58", 0x1002890, Some('⢐')),
    ("braille_dots_158", 0x1002891, Some('⢑')),
    ("braille_dots_258", 0x1002892, Some('⢒')),
    ("braille_dots_1258", 0x1002893, Some('⢓')),
    ("braille_dots_358", 0x1002894, Some('⢔')),
    ("braille_dots_1358", 0x1002895, Some('⢕')),
    ("braille_dots_2358", 0x1002896, Some('⢖')),
    ("braille_dots_12358", 0x1002897, Some('⢗')),
    ("braille_dots_458", 0x1002898, Some('⢘')),
    ("braille_dots_1458", 0x1002899, Some('⢙')),
    ("braille_dots_2458", 0x100289a, Some('⢚')),
    ("braille_dots_12458", 0x100289b, Some('⢛')),
    ("braille_dots_3458", 0x100289c, Some('⢜')),
    ("braille_dots_13458", 0x100289d, Some('⢝')),
    ("braille_dots_23458", 0x100289e, Some('⢞')),
    ("braille_dots_123458", 0x100289f, Some('⢟')),
    ("braille_dots_68", 0x10028a0, Some('⢠')),
    ("braille_dots_168", 0x10028a1, Some('⢡')),
    ("braille_dots_268", 0x10028a2, Some('⢢')),
    ("braille_dots_1268", 0x10028a3, Some('⢣')),
    ("braille_dots_368", 0x10028a4, Some('⢤')),
    ("braille_dots_1368", 0x10028a5, Some('⢥')),
    ("braille_dots_2368", 0x10028a6, Some('⢦')),
    ("braille_dots_12368", 0x10028a7, Some('⢧')),
    ("braille_dots_468", 0x10028a8, Some('⢨')),
    ("braille_dots_1468", 0x10028a9, Some('⢩')),
    ("braille_dots_2468", 0x10028aa, Some('⢪')),
    ("braille_dots_12468", 0x10028ab, Some('⢫')),
    ("braille_dots_3468", 0x10028ac, Some('⢬')),
    ("braille_dots_13468", 0x10028ad, Some('⢭')),
    ("braille_dots_23468", 0x10028ae, Some('⢮')),
    ("braille_dots_123468", 0x10028af, Some('⢯')),
    ("braille_dots_568", 0x10028b0, Some('⢰')),
    ("braille_dots_1568", 0x10028b1, Some('⢱')),
    ("braille_dots_2568", 0x10028b2, Some('⢲')),
    ("braille_dots_12568", 0x10028b3, Some('⢳')),
    ("braille_dots_3568", 0x10028b4, Some('⢴')),
    ("braille_dots_13568", 0x10028b5, Some('⢵')),
    ("braille_dots_23568", 0x10028b6, Some('⢶')),
    ("braille_dots_123568", 0x10028b7, Some('⢷')),
    ("braille_dots_4568", 0x10028b8, Some('⢸')),
    ("braille_dots_14568", 0x10028b9, Some('⢹')),
    ("braille_dots_24568", 0x10028ba, Some('⢺')),
    ("braille_dots_124568", 0x10028bb, Some('⢻')),
    ("braille_dots_34568", 0x10028bc, Some('⢼')),
    ("braille_dots_134568", 0x10028bd, Some('⢽')),
    ("braille_dots_234568", 0x10028be, Some('⢾')),
    ("braille_dots_1234568", 0x10028bf, Some('⢿')),
    ("braille_dots_78", 0x10028c0, Some('⣀')),
    ("braille_dots_178", 0x10028c1, Some('⣁')),
    ("braille_dots_278", 0x10028c2, Some('⣂')),
    ("braille_dots_1278", 0x10028c3, Some('⣃')),
    ("braille_dots_378", 0x10028c4, Some('⣄')),
    ("braille_dots_1378", 0x10028c5, Some('⣅')),
    ("braille_dots_2378", 0x10028c6, Some('⣆')),
    ("braille_dots_12378", 0x10028c7, Some('⣇')),
    ("braille_dots_478", 0x10028c8, Some('⣈')),
    ("braille_dots_1478", 0x10028c9, Some('⣉')),
    ("braille_dots_2478", 0x10028ca, Some('⣊')),
    ("braille_dots_12478", 0x10028cb, Some('⣋')),
    ("braille_dots_3478", 0x10028cc, Some('⣌')),
    ("braille_dots_13478", 0x10028cd, Some('⣍')),
    ("braille_dots_23478", 0x10028ce, Some('⣎')),
    ("braille_dots_123478", 0x10028cf, Some('⣏')),
    ("braille_dots_578", 0x10028d0, Some('⣐')),
    ("braille_dots_1578", 0x10028d1, Some('⣑')),
    ("braille_dots_2578", 0x10028d2, Some('⣒')),
    ("braille_dots_12578", 0x10028d3, Some('⣓')),
    ("braille_dots_3578", 0x10028d4, Some('⣔')),
    ("braille_dots_13578", 0x10028d5, Some('⣕')),
    ("braille_dots_23578", 0x10028d6, Some('⣖')),
    ("braille_dots_123578", 0x10028d7, Some('⣗')),
    ("braille_dots_4578", 0x10028d8, Some('⣘')),
    ("braille_dots_14578", 0x10028d9, Some('⣙')),
    ("braille_dots_24578", 0x10028da, Some('⣚')),
    ("braille_dots_124578", 0x10028db, Some('⣛')),
    ("braille_dots_34578", 0x10028dc, Some('⣜')),
    ("braille_dots_134578", 0x10028dd, Some('⣝')),
    ("braille_dots_234578", 0x10028de, Some('⣞')),
    ("braille_dots_1234578", 0x10028df, Some('⣟')),
    ("braille_dots_678", 0x10028e0, Some('⣠')),
    ("braille_dots_1678", 0x10028e1, Some('⣡')),
    ("braille_dots_2678", 0x10028e2, Some('⣢')),
    ("braille_dots_12678", 0x10028e3, Some('⣣')),
    ("braille_dots_3678", 0x10028e4, Some('⣤')),
    ("braille_dots_13678", 0x10028e5, Some('⣥')),
    ("braille_dots_23678", 0x10028e6, Some('⣦')),
    ("braille_dots_123678", 0x10028e7, Some('⣧')),
    ("braille_dots_4678", 0x10028e8, Some('⣨')),
    ("braille_dots_14678", 0x10028e9, Some('⣩')),
    ("braille_dots_24678", 0x10028ea, Some('⣪')),
    ("braille_dots_124678", 0x10028eb, Some('⣫')),
    ("braille_dots_34678", 0x10028ec, Some('⣬')),
    ("braille_dots_134678", 0x10028ed, Some('⣭')),
    ("braille_dots_234678", 0x10028ee, Some('⣮')),
    ("braille_dots_1234678", 0x10028ef, Some('⣯')),
    ("braille_dots_5678", 0x10028f0, Some('⣰')),
    ("braille_dots_15678", 0x10028f1, Some('⣱')),
    ("braille_dots_25678", 0x10028f2, Some('⣲')),
    ("braille_dots_125678", 0x10028f3, Some('⣳')),
    ("braille_dots_35678", 0x10028f4, Some('⣴')),
    ("braille_dots_135678", 0x10028f5, Some('⣵')),
    ("braille_dots_235678", 0x10028f6, Some('⣶')),
    ("braille_dots_1235678", 0x10028f7, Some('⣷')),
    ("braille_dots_45678", 0x10028f8, Some('⣸')),
    ("braille_dots_145678", 0x10028f9, Some('⣹')),
    ("braille_dots_245678", 0x10028fa, Some('⣺')),
    ("braille_dots_1245678", 0x10028fb, Some('⣻')),
    ("braille_dots_345678", 0x10028fc, Some('⣼')),
    ("braille_dots_1345678", 0x10028fd, Some('⣽')),
    ("braille_dots_2345678", 0x10028fe, Some('⣾')),
    ("braille_dots_12345678", 0x10028ff, Some('⣿')),
    // Sinhala
    ("Sinh_ng", 0x1000d82, Some('\u{d82}')),
    ("Sinh_h2", 0x1000d83, Some('\u{d83}')),
    ("Sinh_a", 0x1000d85, Some('අ')),
    ("Sinh_aa", 0x1000d86, Some('ආ')),
    ("Sinh_ae", 0x1000d87, Some('ඇ')),
    ("Sinh_aee", 0x1000d88, Some('ඈ')),
    ("Sinh_i", 0x1000d89, Some('ඉ')),
    ("Sinh_ii", 0x1000d8a, Some('ඊ')),
    ("Sinh_u", 0x1000d8b, Some('උ')),
    ("Sinh_uu", 0x1000d8c, Some('ඌ')),
    ("Sinh_ri", 0x1000d8d, Some('ඍ')),
    ("Sinh_rii", 0x1000d8e, Some('ඎ')),
    ("Sinh_lu", 0x1000d8f, Some('ඏ')),
    ("Sinh_luu", 0x1000d90, Some('ඐ')),
    ("Sinh_e", 0x1000d91, Some('එ')),
    ("Sinh_ee", 0x1000d92, Some('ඒ')),
    ("Sinh_ai", 0x1000d93, Some('ඓ')),
    ("Sinh_o", 0x1000d94, Some('ඔ')),
    ("Sinh_oo", 0x1000d95, Some('ඕ')),
    ("Sinh_au", 0x1000d96, Some('ඖ')),
    ("Sinh_ka", 0x1000d9a, Some('ක')),
    ("Sinh_kha", 0x1000d9b, Some('ඛ')),
    ("Sinh_ga", 0x1000d9c, Some('ග')),
    ("Sinh_gha", 0x1000d9d, Some('ඝ')),
    ("Sinh_ng2", 0x1000d9e, Some('ඞ')),
    ("Sinh_nga", 0x1000d9f, Some('ඟ')),
    ("Sinh_ca", 0x1000da0, Some('ච')),
    ("Sinh_cha", 0x1000da1, Some('ඡ')),
    ("Sinh_ja", 0x1000da2, Some('ජ')),
    ("Sinh_jha", 0x1000da3, Some('ඣ')),
    ("Sinh_nya", 0x1000da4, Some('ඤ')),
    ("Sinh_jnya", 0x1000da5, Some('ඥ')),
    ("Sinh_nja", 0x1000da6, Some('ඦ')),
    ("Sinh_tta", 0x1000da7, Some('ට')),
    ("Sinh_ttha", 0x1000da8, Some('ඨ')),
    ("Sinh_dda", 0x1000da9, Some('ඩ')),
    ("Sinh_ddha", 0x1000daa, Some('ඪ')),
    ("Sinh_nna", 0x1000dab, Some('ණ')),
    ("Sinh_ndda", 0x1000dac, Some('ඬ')),
    ("Sinh_tha", 0x1000dad, Some('ත')),
    ("Sinh_thha", 0x1000dae, Some('ථ')),
    ("Sinh_dha", 0x1000daf, Some('ද')),
    ("Sinh_dhha", 0x1000db0, Some('ධ')),
    ("Sinh_na", 0x1000db1, Some('න')),
    ("Sinh_ndha", 0x1000db3, Some('ඳ')),
    ("Sinh_pa", 0x1000db4, Some('ප')),
    ("Sinh_pha", 0x1000db5, Some('ඵ')),
    ("Sinh_ba", 0x1000db6, Some('බ')),
    ("Sinh_bha", 0x1000db7, Some('භ')),
    ("Sinh_ma", 0x1000db8, Some('ම')),
    ("Sinh_mba", 0x1000db9, Some('ඹ')),
    ("Sinh_ya", 0x1000dba, Some('ය')),
    ("Sinh_ra", 0x1000dbb, Some('ර')),
    ("Sinh_la", 0x1000dbd, Some('ල')),
    ("Sinh_va", 0x1000dc0, Some('ව')),
    ("Sinh_sha", 0x1000dc1, Some('ශ')),
    ("Sinh_ssha", 0x1000dc2, Some('ෂ')),
    ("Sinh_sa", 0x1000dc3, Some('ස')),
    ("Sinh_ha", 0x1000dc4, Some('හ')),
    ("Sinh_lla", 0x1000dc5, Some('ළ')),
    ("Sinh_fa", 0x1000dc6, Some('ෆ')),
    ("Sinh_al", 0x1000dca, Some('\u{dca}')),
    ("Sinh_aa2", 0x1000dcf, Some('\u{dcf}')),
    ("Sinh_ae2", 0x1000dd0, Some('\u{dd0}')),
    ("Sinh_aee2", 0x1000dd1, Some('\u{dd1}')),
    ("Sinh_i2", 0x1000dd2, Some('\u{dd2}')),
    ("Sinh_ii2", 0x1000dd3, Some('\u{dd3}')),
    ("Sinh_u2", 0x1000dd4, Some('\u{dd4}')),
    ("Sinh_uu2", 0x1000dd6, Some('\u{dd6}')),
    ("Sinh_ru2", 0x1000dd8, Some('\u{dd8}')),
    ("Sinh_e2", 0x1000dd9, Some('\u{dd9}')),
    ("Sinh_ee2", 0x1000dda, Some('\u{dda}')),
    ("Sinh_ai2", 0x1000ddb, Some('\u{ddb}')),
    ("Sinh_o2", 0x1000ddc, Some('\u{ddc}')),
    ("Sinh_oo2", 0x1000ddd, Some('\u{ddd}')),
    ("Sinh_au2", 0x1000dde, Some('\u{dde}')),
    ("Sinh_lu2", 0x1000ddf, Some('\u{ddf}')),
    ("Sinh_ruu2", 0x1000df2, Some('\u{df2}')),
    ("Sinh_luu2", 0x1000df3, Some('\u{df3}')),
    ("Sinh_kunddaliya", 0x1000df4, Some('෴')),
];
